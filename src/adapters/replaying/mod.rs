//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod oca;
pub mod orthocal;

pub use clock::ReplayingClock;
pub use oca::ReplayingOcaSource;
pub use orthocal::ReplayingOrthocalSource;

use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::SourceError;

/// Replayer shared by every replaying adapter of one run.
pub type SharedReplayer = Arc<Mutex<CassetteReplayer>>;

/// Take the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &SharedReplayer,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, SourceError> {
    let mut guard = replayer.lock().unwrap_or_else(PoisonError::into_inner);
    guard.next_interaction(port, method).map(|i| i.output.clone()).map_err(SourceError::Replay)
}

/// Decode an output recorded with the Ok/Err convention of `recording::record_result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, SourceError> {
    let serde_json::Value::Object(mut map) = output else {
        return Err(SourceError::Replay("recorded output is not an Ok/Err object".into()));
    };

    if let Some(ok) = map.remove("Ok") {
        return serde_json::from_value(ok)
            .map_err(|e| SourceError::Replay(format!("cannot decode recorded value: {e}")));
    }

    match map.remove("Err") {
        Some(serde_json::Value::String(message)) => Err(SourceError::Replayed(message)),
        Some(other) => Err(SourceError::Replayed(other.to_string())),
        None => Err(SourceError::Replay("recorded output is not an Ok/Err object".into())),
    }
}
