use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::app::error::Result;
use crate::campaign::{CampaignSession, FallbackSynthesizer};
use crate::config::Config;
use crate::scraper::{ChromeDriver, PageDriver, RecordExtractor};
use crate::store::{CsvStore, RecordStore};

/// Outcome of one collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: usize,
    pub synthetic: bool,
    pub output: PathBuf,
}

pub struct AppContext {
    pub config: Config,
    pub store: CsvStore,
    pub extractor: RecordExtractor,
    pub synthesizer: FallbackSynthesizer,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let store = CsvStore::new(config.campaign.output.clone());
        let extractor = RecordExtractor::new(&config.scraper);
        let synthesizer = FallbackSynthesizer::new(&config.fallback);

        Self {
            config,
            store,
            extractor,
            synthesizer,
        }
    }

    /// Launch Chrome and run the configured campaign end to end
    pub async fn run(&self) -> Result<RunSummary> {
        let driver = ChromeDriver::launch(&self.config.scraper).await?;
        self.run_with(driver, Local::now().date_naive()).await
    }

    /// Run the campaign on an already acquired page.
    ///
    /// The driver is closed before anything is written. A run that collects
    /// nothing is replaced by simulated rows.
    pub async fn run_with<D: PageDriver>(&self, driver: D, today: NaiveDate) -> Result<RunSummary> {
        let plan = self.config.campaign.plan();

        let mut session = CampaignSession::new(driver);
        session
            .run(&plan, &self.config.scraper, &self.extractor, today)
            .await;
        let collected = session.close().await;

        let (records, synthetic) = if collected.is_empty() {
            warn!("No data collected. The site might be blocking; writing simulated data instead.");
            let records = self.synthesizer.synthesize(
                &plan.routes,
                &plan.day_offsets,
                today,
                &mut rand::rng(),
            );
            (records, true)
        } else {
            (collected.into_records(), false)
        };

        let rows_written = self.store.persist(records)?;

        Ok(RunSummary {
            rows_written,
            synthetic,
            output: self.store.path().to_path_buf(),
        })
    }
}
