//! Configuration management for farescout.
//!
//! Configuration is read from `~/.config/farescout/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use crate::campaign::{CampaignConfig, FallbackConfig};
use crate::scraper::ScraperConfig;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub campaign: CampaignConfig,
    pub scraper: ScraperConfig,
    pub fallback: FallbackConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/farescout/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("farescout").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# farescout configuration
#
# Routes are origin/destination pairs of airport or city codes.
# Days are offsets from the day the collector runs, either a range
#   days = { start = 1, end = 30 }
# or an explicit sample
#   days = [1, 7, 14, 30]

[campaign]
routes = [
    { origin = "DEL", destination = "DXB" },
    { origin = "BOM", destination = "LHR" },
    { origin = "DEL", destination = "SIN" },
    { origin = "BOM", destination = "DOH" },
    { origin = "DEL", destination = "JFK" },
]
days = { start = 1, end = 30 }

# Output file, written once at the end of a run
output = "final_flight_data_all.csv"

# Sites to read. max_results keeps only the first N cards of each page
# (page order, not cheapest first).
[[campaign.providers]]
provider = "google_flights"

# [[campaign.providers]]
# provider = "skyscanner"
# max_results = 10

[scraper]
# Show the browser window
headless = false

# Page load timeout in seconds
timeout_secs = 30

# Randomized wait after each page load (milliseconds)
min_delay_ms = 3000
max_delay_ms = 5000

# Scroll-to-end passes used to trigger lazy loading
scroll_passes = 5
scroll_pause_ms = 1000

# Pause after clicking each "more results" button (milliseconds)
click_pause_ms = 2000

# Markers identifying the price line of a result card
currency_markers = ["₹", "$", "€", "£"]

# user_agent = "Mozilla/5.0 ..."
# chrome_executable = "/usr/bin/chromium"

[fallback]
# Price bounds for simulated rows, used only when a run collects nothing
min_price = 4000
max_price = 45000
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
