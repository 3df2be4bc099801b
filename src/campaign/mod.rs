//! Campaign orchestration: the route × day sweep, the browser session that
//! owns it, and the synthetic fallback used when the sweep comes back empty.

mod config;
mod fallback;
mod runner;
mod session;

pub use config::CampaignConfig;
pub use fallback::{FallbackConfig, FallbackSynthesizer};
pub use runner::CampaignRunner;
pub use session::CampaignSession;

use crate::domain::{FlightRecord, ProviderSettings, RouteSpec};

/// Everything a single run visits, resolved from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignPlan {
    pub routes: Vec<RouteSpec>,
    pub day_offsets: Vec<u32>,
    pub providers: Vec<ProviderSettings>,
}

impl CampaignPlan {
    /// Number of page loads the plan will attempt
    pub fn page_count(&self) -> usize {
        self.routes.len() * self.day_offsets.len() * self.providers.len()
    }
}

/// Records collected during one run, in the order they were scraped.
///
/// Append-only: records go in through [`extend`](Self::extend) and come out
/// once through [`into_records`](Self::into_records).
#[derive(Debug, Default)]
pub struct RunAccumulator {
    records: Vec<FlightRecord>,
}

impl RunAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = FlightRecord>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FlightRecord> {
        self.records
    }
}
