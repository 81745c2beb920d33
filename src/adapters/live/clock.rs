//! Live clock using the system clock.

use chrono::{Local, NaiveDate};

use crate::ports::clock::Clock;
use crate::ports::SourceError;

/// Live clock that returns the real current local date.
pub struct LiveClock;

impl Clock for LiveClock {
    fn today(&self) -> Result<NaiveDate, SourceError> {
        Ok(Local::now().date_naive())
    }
}
