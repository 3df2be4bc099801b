//! Page interaction and result extraction.
//!
//! This module turns one loaded search-results page into flight records.
//!
//! # Architecture
//!
//! ```text
//! URL → PageDriver.navigate → Pacer → ContentRevealer → card snapshots → RecordExtractor → FlightRecord
//! ```
//!
//! Everything above the [`PageDriver`] trait is browser-agnostic; the
//! [`ChromeDriver`] implementation talks to Chrome through chromiumoxide.
//!
//! # Usage
//!
//! ```rust,ignore
//! use farescout::scraper::{ChromeDriver, RecordExtractor, RouteDayScraper, ScraperConfig};
//!
//! let config = ScraperConfig::default();
//! let driver = ChromeDriver::launch(&config).await?;
//! let extractor = RecordExtractor::new(&config);
//! let scraper = RouteDayScraper::new(&driver, &config, &extractor, today);
//!
//! let records = scraper.scrape(&settings, &route, 7).await;
//! ```

mod chrome;
mod config;
mod extractor;
mod pacing;
mod reveal;
mod route_day;

#[cfg(test)]
pub(crate) mod testing;

pub use chrome::ChromeDriver;
pub use config::ScraperConfig;
pub use extractor::{ExtractedCard, FieldChain, FieldRule, PriceScanner, RecordExtractor};
pub use pacing::Pacer;
pub use reveal::{ContentRevealer, RevealStats};
pub use route_day::RouteDayScraper;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app::Result;
use crate::domain::CardQuery;

/// Raw view of one result card as read from the page.
///
/// Every lookup that fails in the page leaves its field empty instead of
/// failing the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSnapshot {
    /// Text of the dedicated airline label, if the card has one
    pub label: Option<String>,
    /// Alt text of the card's logo image, if any
    pub image_alt: Option<String>,
    /// Full rendered text of the card, one visual line per text line
    pub text: String,
}

impl CardSnapshot {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// A single browser tab, driven one action at a time
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Load a URL and wait for the navigation to finish
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Scroll the document to its end once
    async fn scroll_to_end(&self) -> Result<()>;

    /// Click every button whose text contains `text`, in document order.
    ///
    /// The buttons are looked up once, before the first click, so one that
    /// expands the list and disappears does not hide the rest. Waits `pause`
    /// after each click. Returns how many clicks went through; a failed
    /// click is skipped, only a failed lookup is an error.
    async fn click_controls(&self, text: &str, pause: Duration) -> Result<usize>;

    /// Read every result card matching the query, in DOM order
    async fn card_snapshots(&self, query: &CardQuery) -> Result<Vec<CardSnapshot>>;

    /// Release the underlying browser resources
    async fn close(&mut self) -> Result<()>;
}
