use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::app::Result;
use crate::domain::FlightRecord;
use crate::store::RecordStore;

/// Output header; must match the field order of [`FlightRow`]
pub const COLUMNS: [&str; 8] = [
    "route",
    "flight_date",
    "days_to_departure",
    "airline",
    "price",
    "duration",
    "stops",
    "source",
];

/// One output row; field order is the column order
#[derive(Debug, Serialize)]
struct FlightRow<'a> {
    route: String,
    flight_date: String,
    days_to_departure: u32,
    airline: &'a str,
    price: u64,
    duration: &'a str,
    stops: &'a str,
    source: &'a str,
}

impl<'a> From<&'a FlightRecord> for FlightRow<'a> {
    fn from(record: &'a FlightRecord) -> Self {
        Self {
            route: record.route.label(),
            flight_date: record.flight_date.format("%Y-%m-%d").to_string(),
            days_to_departure: record.days_to_departure,
            airline: &record.airline,
            price: record.price.get(),
            duration: &record.duration,
            stops: &record.stops,
            source: &record.source,
        }
    }
}

/// Drop exact duplicate rows, then order by route, date and price.
///
/// The sort is stable, so rows that tie on all three keep scrape order.
pub fn prepare(records: Vec<FlightRecord>) -> Vec<FlightRecord> {
    let mut seen = HashSet::new();
    let mut unique: Vec<FlightRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.fingerprint()))
        .collect();

    unique.sort_by_cached_key(|r| (r.route.label(), r.flight_date, r.price));
    unique
}

/// Writes the sorted dataset as a comma-separated file with a header row
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvStore {
    fn persist(&self, records: Vec<FlightRecord>) -> Result<usize> {
        let total = records.len();
        let rows = prepare(records);
        if rows.len() < total {
            debug!("Dropped {} duplicate rows", total - rows.len());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(COLUMNS)?;
        for record in &rows {
            writer.serialize(FlightRow::from(record))?;
        }
        writer.flush()?;

        let simulated = rows.iter().filter(|r| r.is_simulated()).count();
        if simulated > 0 {
            info!("Saved {} rows to {} ({} simulated)", rows.len(), self.path.display(), simulated);
        } else {
            info!("Saved {} rows to {}", rows.len(), self.path.display());
        }
        Ok(rows.len())
    }
}
