//! Replaying adapter for the `PrimarySource` port.

use chrono::NaiveDate;

use super::{next_output, replay_result, SharedReplayer};
use crate::ports::{PrimarySource, SourceFuture};
use crate::readings::{RawReading, ReadingLink};

/// Serves recorded OCA results from a cassette.
pub struct ReplayingOcaSource {
    replayer: SharedReplayer,
}

impl ReplayingOcaSource {
    /// Create a replaying OCA source backed by the given replayer.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl PrimarySource for ReplayingOcaSource {
    fn day_index(&self, _date: NaiveDate) -> SourceFuture<'_, Vec<ReadingLink>> {
        let result = next_output(&self.replayer, "oca", "day_index").and_then(replay_result);
        Box::pin(async move { result })
    }

    fn reading_page(&self, _link: &ReadingLink) -> SourceFuture<'_, RawReading> {
        let result = next_output(&self.replayer, "oca", "reading_page").and_then(replay_result);
        Box::pin(async move { result })
    }

    fn commemorations(&self, _date: NaiveDate) -> SourceFuture<'_, Vec<String>> {
        let result = next_output(&self.replayer, "oca", "commemorations").and_then(replay_result);
        Box::pin(async move { result })
    }
}
