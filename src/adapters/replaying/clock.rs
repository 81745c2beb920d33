//! Replaying adapter for the `Clock` port.

use chrono::NaiveDate;

use super::{next_output, replay_result, SharedReplayer};
use crate::ports::{Clock, SourceError};

/// Replays recorded dates from a cassette.
pub struct ReplayingClock {
    replayer: SharedReplayer,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a shared replayer.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl Clock for ReplayingClock {
    fn today(&self) -> Result<NaiveDate, SourceError> {
        replay_result(next_output(&self.replayer, "clock", "today")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::cassette::replayer::CassetteReplayer;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn make_replayer(outputs: Vec<serde_json::Value>) -> SharedReplayer {
        let interactions = outputs
            .into_iter()
            .enumerate()
            .map(|(seq, output)| Interaction {
                seq: seq as u64,
                port: "clock".into(),
                method: "today".into(),
                input: json!(null),
                output,
            })
            .collect();
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        };
        Arc::new(Mutex::new(CassetteReplayer::new(&cassette)))
    }

    #[test]
    fn serves_recorded_dates_in_order() {
        let clock = ReplayingClock::new(make_replayer(vec![
            json!({"Ok": "2026-01-01"}),
            json!({"Ok": "2026-01-02"}),
        ]));
        assert_eq!(clock.today().unwrap(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(clock.today().unwrap(), NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
    }

    #[test]
    fn exhausted_clock_is_an_error() {
        let clock = ReplayingClock::new(make_replayer(vec![]));
        assert!(matches!(clock.today(), Err(SourceError::Replay(_))));
    }
}
