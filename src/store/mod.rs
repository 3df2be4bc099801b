pub mod csv_store;

use crate::app::Result;
use crate::domain::FlightRecord;

pub use csv_store::CsvStore;

pub trait RecordStore {
    /// Persist a finished run; returns the number of rows written
    fn persist(&self, records: Vec<FlightRecord>) -> Result<usize>;
}
