use std::num::NonZeroU64;

use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::record::SIMULATED_SOURCE;
use crate::domain::{travel_date, FlightRecord, RouteSpec};

const AIRLINES: [&str; 5] = ["IndiGo", "Air India", "Emirates", "Vistara", "Qatar Airways"];
const DURATIONS: [&str; 4] = ["3 hr 35 min", "5 hr 10 min", "9 hr 50 min", "16 hr 20 min"];
const STOPS: [&str; 3] = ["Non-stop", "1 stop", "2 stops"];

/// Price bounds for generated rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Lowest generated price (default: 4000)
    pub min_price: u64,

    /// Highest generated price (default: 45000)
    pub max_price: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            min_price: 4000,
            max_price: 45000,
        }
    }
}

/// Generates placeholder rows when a campaign collected nothing.
///
/// Every generated record carries the `Simulated` source so it cannot be
/// mistaken for an observed fare.
#[derive(Debug, Clone)]
pub struct FallbackSynthesizer {
    min_price: u64,
    max_price: u64,
}

impl FallbackSynthesizer {
    pub fn new(config: &FallbackConfig) -> Self {
        let min_price = config.min_price.max(1);
        let max_price = config.max_price.max(min_price);
        Self {
            min_price,
            max_price,
        }
    }

    /// One record per (route, day offset), in route-major order
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        routes: &[RouteSpec],
        day_offsets: &[u32],
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<FlightRecord> {
        let mut records = Vec::with_capacity(routes.len() * day_offsets.len());

        for route in routes {
            for &day_offset in day_offsets {
                let flight_date = match travel_date(today, day_offset) {
                    Ok(date) => date,
                    Err(e) => {
                        warn!("Not synthesizing {} day {}: {}", route, day_offset, e);
                        continue;
                    }
                };

                let price = rng.random_range(self.min_price..=self.max_price);
                records.push(FlightRecord {
                    route: route.clone(),
                    flight_date,
                    days_to_departure: day_offset,
                    airline: pick(&AIRLINES, rng),
                    price: NonZeroU64::new(price).unwrap_or(NonZeroU64::MIN),
                    duration: pick(&DURATIONS, rng),
                    stops: pick(&STOPS, rng),
                    source: SIMULATED_SOURCE.to_string(),
                });
            }
        }

        records
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}
