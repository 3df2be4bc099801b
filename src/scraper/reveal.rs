use std::time::Duration;

use tracing::debug;

use crate::scraper::{PageDriver, ScraperConfig};

/// What a reveal pass managed to do, for logging only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealStats {
    pub scrolls: usize,
    pub clicks: usize,
}

/// Forces lazily rendered results onto the page.
///
/// Scrolls to the end a fixed number of times, then clicks every
/// "more results" control it can find. Failures are swallowed.
#[derive(Debug, Clone)]
pub struct ContentRevealer {
    scroll_passes: usize,
    scroll_pause: Duration,
    click_pause: Duration,
}

impl ContentRevealer {
    pub fn new(config: &ScraperConfig) -> Self {
        Self {
            scroll_passes: config.scroll_passes,
            scroll_pause: config.scroll_pause(),
            click_pause: config.click_pause(),
        }
    }

    pub async fn reveal<D: PageDriver + ?Sized>(&self, page: &D, more_text: &str) -> RevealStats {
        let mut stats = RevealStats::default();

        for pass in 0..self.scroll_passes {
            match page.scroll_to_end().await {
                Ok(()) => stats.scrolls += 1,
                Err(e) => debug!("Scroll pass {} failed: {}", pass + 1, e),
            }
            tokio::time::sleep(self.scroll_pause).await;
        }

        match page.click_controls(more_text, self.click_pause).await {
            Ok(clicked) => stats.clicks = clicked,
            Err(e) => debug!("Could not look up '{}' controls: {}", more_text, e),
        }

        stats
    }
}
