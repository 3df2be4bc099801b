pub mod provider;
pub mod record;
pub mod schedule;

pub use provider::{CardQuery, Provider, ProviderSettings};
pub use record::{FlightRecord, RouteSpec};
pub use schedule::{travel_date, DaySchedule};
