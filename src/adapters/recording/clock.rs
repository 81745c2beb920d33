//! Recording adapter for the `Clock` port.

use chrono::NaiveDate;

use super::{record_result, SharedRecorder};
use crate::ports::{Clock, SourceError};

/// Records clock interactions while delegating to an inner implementation.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: SharedRecorder,
}

impl RecordingClock {
    /// Creates a new recording clock wrapping the given implementation.
    pub fn new(inner: Box<dyn Clock>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn today(&self) -> Result<NaiveDate, SourceError> {
        let result = self.inner.today();
        record_result(&self.recorder, "clock", "today", &(), &result);
        result
    }
}
