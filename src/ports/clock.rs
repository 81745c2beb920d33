//! Clock port for obtaining the current date.

use chrono::NaiveDate;

use super::SourceError;

/// Provides the current calendar date.
///
/// Abstracting time access allows deterministic replay by substituting
/// a recorded clock during tests and cassette playback.
pub trait Clock: Send + Sync {
    /// Returns today's date in local time.
    ///
    /// # Errors
    ///
    /// Returns an error only when a replayed date cannot be served.
    fn today(&self) -> Result<NaiveDate, SourceError>;
}
