use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::campaign::CampaignPlan;
use crate::domain::{DaySchedule, Provider, ProviderSettings, RouteSpec};

/// Which routes, days and sites a run covers, and where the rows go
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Origin/destination pairs, visited in order
    pub routes: Vec<RouteSpec>,

    /// Day offsets from today (default: 1 through 30)
    pub days: DaySchedule,

    /// Sites to read, each with an optional positional result cap
    pub providers: Vec<ProviderSettings>,

    /// CSV output path (default: final_flight_data_all.csv)
    pub output: PathBuf,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            routes: vec![
                RouteSpec::new("DEL", "DXB"),
                RouteSpec::new("BOM", "LHR"),
                RouteSpec::new("DEL", "SIN"),
                RouteSpec::new("BOM", "DOH"),
                RouteSpec::new("DEL", "JFK"),
            ],
            days: DaySchedule::default(),
            providers: vec![ProviderSettings::new(Provider::GoogleFlights)],
            output: PathBuf::from("final_flight_data_all.csv"),
        }
    }
}

impl CampaignConfig {
    pub fn plan(&self) -> CampaignPlan {
        CampaignPlan {
            routes: self.routes.clone(),
            day_offsets: self.days.offsets(),
            providers: self.providers.clone(),
        }
    }
}
