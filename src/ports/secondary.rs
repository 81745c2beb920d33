//! Secondary source port: the orthocal calendar API.

use chrono::NaiveDate;

use super::SourceFuture;
use crate::readings::LiturgicalInfo;

/// Supplies day titles and short reading descriptions.
pub trait SecondarySource: Send + Sync {
    /// Fetches titles and reading descriptions for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable or answers with malformed JSON.
    fn liturgical_info(&self, date: NaiveDate) -> SourceFuture<'_, LiturgicalInfo>;
}
