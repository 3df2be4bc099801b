//! In-memory page used by unit tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::app::{FarescoutError, Result};
use crate::domain::CardQuery;
use crate::scraper::{CardSnapshot, PageDriver, ScraperConfig};

/// Scraper settings with every wait set to zero
pub fn instant_config() -> ScraperConfig {
    ScraperConfig {
        min_delay_ms: 0,
        max_delay_ms: 0,
        scroll_pause_ms: 0,
        click_pause_ms: 0,
        ..Default::default()
    }
}

#[derive(Default)]
struct PageState {
    current: Option<String>,
    visited: Vec<String>,
    scrolls: usize,
    controls: Vec<String>,
    clicked: Vec<String>,
    queries: Vec<CardQuery>,
    closed: bool,
}

/// Serves canned cards per URL fragment.
///
/// Clones share their recorded state, so a test can keep one clone while
/// another is moved into a session.
#[derive(Default, Clone)]
pub struct FakePage {
    cards: Vec<(String, Vec<CardSnapshot>)>,
    default_cards: Vec<CardSnapshot>,
    broken_urls: HashSet<String>,
    failing_interactions: bool,
    state: Arc<Mutex<PageState>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards served on every page without a more specific entry
    pub fn with_default_cards(mut self, cards: Vec<CardSnapshot>) -> Self {
        self.default_cards = cards;
        self
    }

    /// Cards served on pages whose URL contains `fragment`
    pub fn with_cards(mut self, fragment: &str, cards: Vec<CardSnapshot>) -> Self {
        self.cards.push((fragment.to_string(), cards));
        self
    }

    /// Navigation to URLs containing `fragment` fails
    pub fn with_broken(mut self, fragment: &str) -> Self {
        self.broken_urls.insert(fragment.to_string());
        self
    }

    /// Buttons on the page; each one is removed when clicked
    pub fn with_controls(self, labels: &[&str]) -> Self {
        self.state.lock().unwrap().controls = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn failing_interactions(mut self) -> Self {
        self.failing_interactions = true;
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.state.lock().unwrap().visited.clone()
    }

    pub fn scroll_count(&self) -> usize {
        self.state.lock().unwrap().scrolls
    }

    pub fn clicked(&self) -> Vec<String> {
        self.state.lock().unwrap().clicked.clone()
    }

    pub fn remaining_controls(&self) -> Vec<String> {
        self.state.lock().unwrap().controls.clone()
    }

    pub fn queries(&self) -> Vec<CardQuery> {
        self.state.lock().unwrap().queries.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }
}

#[async_trait]
impl PageDriver for FakePage {
    async fn navigate(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.visited.push(url.to_string());
        if self.broken_urls.iter().any(|f| url.contains(f.as_str())) {
            state.current = None;
            return Err(FarescoutError::Navigation {
                url: url.to_string(),
                reason: "net::ERR_CONNECTION_RESET".into(),
            });
        }
        state.current = Some(url.to_string());
        Ok(())
    }

    async fn scroll_to_end(&self) -> Result<()> {
        if self.failing_interactions {
            return Err(FarescoutError::Browser("detached".into()));
        }
        self.state.lock().unwrap().scrolls += 1;
        Ok(())
    }

    async fn click_controls(&self, text: &str, pause: Duration) -> Result<usize> {
        let found: Vec<String> = {
            let state = self.state.lock().unwrap();
            state.controls.iter().filter(|c| c.contains(text)).cloned().collect()
        };

        let mut clicked = 0;
        for label in found {
            if !self.failing_interactions {
                let mut state = self.state.lock().unwrap();
                state.controls.retain(|c| *c != label);
                state.clicked.push(label);
                clicked += 1;
            }
            tokio::time::sleep(pause).await;
        }
        Ok(clicked)
    }

    async fn card_snapshots(&self, query: &CardQuery) -> Result<Vec<CardSnapshot>> {
        let mut state = self.state.lock().unwrap();
        state.queries.push(*query);
        let url = state
            .current
            .clone()
            .ok_or_else(|| FarescoutError::Script("no document".into()))?;

        let cards = self
            .cards
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, cards)| cards.clone())
            .unwrap_or_else(|| self.default_cards.clone());

        Ok(match query.limit {
            Some(limit) => cards.into_iter().take(limit).collect(),
            None => cards,
        })
    }

    async fn close(&mut self) -> Result<()> {
        self.state.lock().unwrap().closed = true;
        Ok(())
    }
}
