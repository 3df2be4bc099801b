use chrono::NaiveDate;
use tracing::{error, info};

use crate::campaign::{CampaignPlan, CampaignRunner, RunAccumulator};
use crate::scraper::{PageDriver, RecordExtractor, RouteDayScraper, ScraperConfig};

/// One browser session and the records it collects.
///
/// Running never fails, so a caller that awaits [`close`](Self::close)
/// after [`run`](Self::run) always releases the browser.
pub struct CampaignSession<D: PageDriver> {
    driver: D,
    accumulator: RunAccumulator,
}

impl<D: PageDriver> CampaignSession<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            accumulator: RunAccumulator::new(),
        }
    }

    pub async fn run(
        &mut self,
        plan: &CampaignPlan,
        config: &ScraperConfig,
        extractor: &RecordExtractor,
        today: NaiveDate,
    ) -> usize {
        info!(
            "Starting campaign: {} routes × {} days × {} providers ({} pages)",
            plan.routes.len(),
            plan.day_offsets.len(),
            plan.providers.len(),
            plan.page_count()
        );

        let scraper = RouteDayScraper::new(&self.driver, config, extractor, today);
        CampaignRunner::new(scraper)
            .run_into(plan, &mut self.accumulator)
            .await;

        info!("Campaign finished with {} flights", self.accumulator.len());
        self.accumulator.len()
    }

    /// Release the browser and hand back everything collected
    pub async fn close(mut self) -> RunAccumulator {
        if let Err(e) = self.driver.close().await {
            error!("Failed to release browser session: {}", e);
        }
        self.accumulator
    }
}
