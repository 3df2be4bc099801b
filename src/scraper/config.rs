use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the browser session and page handling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Whether to run the browser in headless mode (default: false)
    pub headless: bool,

    /// Page load timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// Lower bound of the randomized wait after each page load, in milliseconds (default: 3000)
    pub min_delay_ms: u64,

    /// Upper bound of the randomized wait after each page load, in milliseconds (default: 5000)
    pub max_delay_ms: u64,

    /// Number of scroll-to-end passes used to trigger lazy loading (default: 5)
    pub scroll_passes: usize,

    /// Pause after each scroll pass in milliseconds (default: 1000)
    pub scroll_pause_ms: u64,

    /// Pause after each "more results" click in milliseconds (default: 2000)
    pub click_pause_ms: u64,

    /// Markers identifying the price line of a result card
    pub currency_markers: Vec<String>,

    /// User agent string to use
    pub user_agent: Option<String>,

    /// Explicit Chrome/Chromium binary; autodetected when unset
    pub chrome_executable: Option<PathBuf>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            headless: false,
            timeout_secs: 30,
            min_delay_ms: 3000,
            max_delay_ms: 5000,
            scroll_passes: 5,
            scroll_pause_ms: 1000,
            click_pause_ms: 2000,
            currency_markers: vec![
                "₹".to_string(),
                "$".to_string(),
                "€".to_string(),
                "£".to_string(),
            ],
            user_agent: None,
            chrome_executable: None,
        }
    }
}

impl ScraperConfig {
    /// Get the page load timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the lower pacing bound as a Duration
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    /// Get the upper pacing bound as a Duration
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    pub fn scroll_pause(&self) -> Duration {
        Duration::from_millis(self.scroll_pause_ms)
    }

    pub fn click_pause(&self) -> Duration {
        Duration::from_millis(self.click_pause_ms)
    }

    /// Create a config with short waits (more likely to be challenged)
    pub fn fast() -> Self {
        Self {
            timeout_secs: 15,
            min_delay_ms: 1000,
            max_delay_ms: 2000,
            scroll_passes: 3,
            scroll_pause_ms: 500,
            click_pause_ms: 1000,
            ..Default::default()
        }
    }

    /// Create a config with generous waits (slower, friendlier pacing)
    pub fn thorough() -> Self {
        Self {
            timeout_secs: 60,
            min_delay_ms: 5000,
            max_delay_ms: 9000,
            scroll_passes: 8,
            scroll_pause_ms: 1500,
            click_pause_ms: 3000,
            ..Default::default()
        }
    }
}
