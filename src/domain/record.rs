use std::fmt;
use std::num::NonZeroU64;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Airline label used when neither the label nor the logo alt text resolves.
pub const UNKNOWN_AIRLINE: &str = "Unknown Airline";

/// Duration label used when no "hr"/"min" line is present.
pub const NO_DURATION: &str = "N/A";

pub const NON_STOP: &str = "Non-stop";
pub const ONE_PLUS_STOPS: &str = "1+ Stops";

/// Source tag carried by generated placeholder rows.
pub const SIMULATED_SOURCE: &str = "Simulated";

/// An (origin, destination) pair of short location codes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RouteSpec {
    pub origin: String,
    pub destination: String,
}

impl RouteSpec {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// `ORIGIN-DEST`, as written to the output file.
    pub fn label(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }
}

impl fmt::Display for RouteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// One flight offer, either observed on a results page or synthesized.
///
/// The price is a `NonZeroU64`, so a record can never carry a zero price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub route: RouteSpec,
    pub flight_date: NaiveDate,
    pub days_to_departure: u32,
    pub airline: String,
    pub price: NonZeroU64,
    pub duration: String,
    pub stops: String,
    pub source: String,
}

impl FlightRecord {
    pub fn is_simulated(&self) -> bool {
        self.source == SIMULATED_SOURCE
    }

    /// Deterministic hash over every persisted column.
    ///
    /// Two records with the same fingerprint produce identical output rows.
    pub fn fingerprint(&self) -> String {
        let route = self.route.label();
        let date = self.flight_date.format("%Y-%m-%d").to_string();
        let days = self.days_to_departure.to_string();
        let price = self.price.to_string();

        let mut hasher = Sha256::new();
        let fields: [&str; 8] = [
            &route,
            &date,
            &days,
            &self.airline,
            &price,
            &self.duration,
            &self.stops,
            &self.source,
        ];
        for field in fields {
            hasher.update(field.as_bytes());
            hasher.update([0x1f]);
        }
        hex::encode(hasher.finalize())
    }
}
