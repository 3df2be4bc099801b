use tracing::info;

use crate::campaign::{CampaignPlan, RunAccumulator};
use crate::scraper::{PageDriver, RouteDayScraper};

/// Sweeps provider × route × day offset, one page at a time
pub struct CampaignRunner<'a, D: PageDriver + ?Sized> {
    scraper: RouteDayScraper<'a, D>,
}

impl<'a, D: PageDriver + ?Sized> CampaignRunner<'a, D> {
    pub fn new(scraper: RouteDayScraper<'a, D>) -> Self {
        Self { scraper }
    }

    /// Run the full plan into a fresh accumulator
    pub async fn run(&self, plan: &CampaignPlan) -> RunAccumulator {
        let mut accumulator = RunAccumulator::new();
        self.run_into(plan, &mut accumulator).await;
        accumulator
    }

    /// Run the full plan, appending to `accumulator`.
    ///
    /// Never stops early: an empty or failed day just contributes nothing.
    pub async fn run_into(&self, plan: &CampaignPlan, accumulator: &mut RunAccumulator) {
        for settings in &plan.providers {
            for route in &plan.routes {
                info!(
                    "Scraping all flights: {} via {}",
                    route,
                    settings.provider.source_name()
                );
                let before = accumulator.len();

                for &day_offset in &plan.day_offsets {
                    let records = self.scraper.scrape(settings, route, day_offset).await;
                    accumulator.extend(records);
                }

                info!(
                    "{}: {} flights over {} days",
                    route.label(),
                    accumulator.len() - before,
                    plan.day_offsets.len()
                );
            }
        }
    }
}
