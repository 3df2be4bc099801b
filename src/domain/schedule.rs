use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::app::{FarescoutError, Result};

/// Which day offsets a campaign visits.
///
/// In TOML either `days = { start = 1, end = 30 }` or `days = [1, 7, 14]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaySchedule {
    /// Every offset from `start` to `end`, inclusive.
    Range { start: u32, end: u32 },
    /// An explicit sparse sample, visited in the given order.
    Sample(Vec<u32>),
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self::Range { start: 1, end: 30 }
    }
}

impl DaySchedule {
    pub fn offsets(&self) -> Vec<u32> {
        match self {
            Self::Range { start, end } => (*start..=*end).collect(),
            Self::Sample(days) => days.clone(),
        }
    }
}

/// The calendar date `offset` days after `today`.
pub fn travel_date(today: NaiveDate, offset: u32) -> Result<NaiveDate> {
    today
        .checked_add_days(Days::new(u64::from(offset)))
        .ok_or(FarescoutError::DateOutOfRange(offset))
}
