use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tempfile::tempdir;

use farescout::app::{AppContext, FarescoutError, Result};
use farescout::campaign::CampaignConfig;
use farescout::config::Config;
use farescout::domain::{CardQuery, DaySchedule, RouteSpec};
use farescout::scraper::{CardSnapshot, PageDriver, ScraperConfig};

/// A page that either always blocks or always serves the same cards
#[derive(Clone, Default)]
struct StubPage {
    cards: Vec<CardSnapshot>,
    blocked: bool,
    closed: Arc<Mutex<bool>>,
}

#[async_trait]
impl PageDriver for StubPage {
    async fn navigate(&self, url: &str) -> Result<()> {
        if self.blocked {
            return Err(FarescoutError::Navigation {
                url: url.to_string(),
                reason: "challenge".into(),
            });
        }
        Ok(())
    }

    async fn scroll_to_end(&self) -> Result<()> {
        Ok(())
    }

    async fn click_controls(&self, _text: &str, _pause: Duration) -> Result<usize> {
        Ok(0)
    }

    async fn card_snapshots(&self, _query: &CardQuery) -> Result<Vec<CardSnapshot>> {
        Ok(self.cards.clone())
    }

    async fn close(&mut self) -> Result<()> {
        *self.closed.lock().unwrap() = true;
        Ok(())
    }
}

fn config(output: std::path::PathBuf) -> Config {
    Config {
        campaign: CampaignConfig {
            routes: vec![RouteSpec::new("DEL", "DXB"), RouteSpec::new("BOM", "LHR")],
            days: DaySchedule::Sample(vec![1, 5, 9]),
            output,
            ..Default::default()
        },
        scraper: ScraperConfig {
            min_delay_ms: 0,
            max_delay_ms: 0,
            scroll_pause_ms: 0,
            click_pause_ms: 0,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 29).unwrap()
}

fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.records().map(|r| r.unwrap()).collect()
}

#[tokio::test]
async fn blocked_campaign_falls_back_to_simulated_rows() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("flights.csv");
    let ctx = AppContext::new(config(output.clone()));
    let page = StubPage {
        blocked: true,
        ..Default::default()
    };
    let closed = page.closed.clone();

    let summary = ctx.run_with(page, today()).await.unwrap();

    assert!(summary.synthetic);
    assert_eq!(summary.rows_written, 2 * 3);
    assert!(*closed.lock().unwrap());

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| &r[7] == "Simulated"));
}

#[tokio::test]
async fn live_rows_are_sorted_and_deduplicated() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("flights.csv");
    let ctx = AppContext::new(config(output.clone()));
    let page = StubPage {
        cards: vec![
            CardSnapshot {
                label: Some("Emirates".into()),
                image_alt: None,
                text: "Emirates\n1 stop\n7 hr 5 min\n₹ 22,000".into(),
            },
            CardSnapshot {
                label: None,
                image_alt: Some("IndiGo".into()),
                text: "IndiGo\nNon-stop\n3 hr 40 min\n₹ 11,250".into(),
            },
            CardSnapshot::from_text("Sponsored\nSee deals"),
            CardSnapshot {
                label: None,
                image_alt: Some("IndiGo".into()),
                text: "IndiGo\nNon-stop\n3 hr 40 min\n₹ 11,250".into(),
            },
        ],
        ..Default::default()
    };

    let summary = ctx.run_with(page, today()).await.unwrap();

    assert!(!summary.synthetic);
    assert_eq!(summary.rows_written, 2 * 3 * 2);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 12);
    assert_eq!(&rows[0][0], "BOM-LHR");
    assert_eq!(&rows[0][1], "2024-05-30");
    assert_eq!(&rows[0][3], "IndiGo");
    assert_eq!(&rows[0][4], "11250");
    assert_eq!(&rows[0][6], "Non-stop");
    assert_eq!(&rows[1][4], "22000");
    assert_eq!(&rows[1][6], "1 stop");
    assert_eq!(&rows[11][0], "DEL-DXB");
    assert_eq!(&rows[11][1], "2024-06-07");

    for pair in rows.windows(2) {
        let a = (&pair[0][0], &pair[0][1], pair[0][4].parse::<u64>().unwrap());
        let b = (&pair[1][0], &pair[1][1], pair[1][4].parse::<u64>().unwrap());
        assert!(a <= b);
    }
    assert!(rows.iter().all(|r| &r[7] == "Google Flights"));
}
