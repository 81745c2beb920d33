//! Replaying adapter for the `SecondarySource` port.

use chrono::NaiveDate;

use super::{next_output, replay_result, SharedReplayer};
use crate::ports::{SecondarySource, SourceFuture};
use crate::readings::LiturgicalInfo;

/// Serves recorded orthocal results from a cassette.
pub struct ReplayingOrthocalSource {
    replayer: SharedReplayer,
}

impl ReplayingOrthocalSource {
    /// Create a replaying orthocal source backed by the given replayer.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl SecondarySource for ReplayingOrthocalSource {
    fn liturgical_info(&self, _date: NaiveDate) -> SourceFuture<'_, LiturgicalInfo> {
        let result =
            next_output(&self.replayer, "orthocal", "liturgical_info").and_then(replay_result);
        Box::pin(async move { result })
    }
}
