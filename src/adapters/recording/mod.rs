//! Recording adapters that capture interactions to a cassette.

pub mod clock;
pub mod oca;
pub mod orthocal;

pub use clock::RecordingClock;
pub use oca::RecordingOcaSource;
pub use orthocal::RecordingOrthocalSource;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::warn;

use crate::cassette::recorder::CassetteRecorder;

/// Recorder shared by every recording adapter of one run.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        warn!(error = %e, "failed to serialize recorded value");
        serde_json::Value::Null
    })
}

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e.to_string()}`
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => serde_json::json!({ "Ok": to_json(v) }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    guard.record(port, method, to_json(input), output);
}
