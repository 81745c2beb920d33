//! Recording adapter for the `PrimarySource` port.

use chrono::NaiveDate;

use super::{record_result, SharedRecorder};
use crate::ports::{PrimarySource, SourceFuture};
use crate::readings::{RawReading, ReadingLink};

/// Records OCA interactions while delegating to an inner implementation.
pub struct RecordingOcaSource {
    inner: Box<dyn PrimarySource>,
    recorder: SharedRecorder,
}

impl RecordingOcaSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn PrimarySource>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl PrimarySource for RecordingOcaSource {
    fn day_index(&self, date: NaiveDate) -> SourceFuture<'_, Vec<ReadingLink>> {
        Box::pin(async move {
            let result = self.inner.day_index(date).await;
            record_result(&self.recorder, "oca", "day_index", &date, &result);
            result
        })
    }

    fn reading_page(&self, link: &ReadingLink) -> SourceFuture<'_, RawReading> {
        let link = link.clone();
        Box::pin(async move {
            let result = self.inner.reading_page(&link).await;
            record_result(&self.recorder, "oca", "reading_page", &link, &result);
            result
        })
    }

    fn commemorations(&self, date: NaiveDate) -> SourceFuture<'_, Vec<String>> {
        Box::pin(async move {
            let result = self.inner.commemorations(date).await;
            record_result(&self.recorder, "oca", "commemorations", &date, &result);
            result
        })
    }
}
