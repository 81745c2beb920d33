//! Primary source port: the OCA daily readings pages.

use chrono::NaiveDate;

use super::SourceFuture;
use crate::readings::{RawReading, ReadingLink};

/// Supplies the day's readings and commemorations.
pub trait PrimarySource: Send + Sync {
    /// Lists the reading pages for `date`, sorted by sequence index.
    ///
    /// # Errors
    ///
    /// Returns an error if the day page cannot be fetched or parsed.
    fn day_index(&self, date: NaiveDate) -> SourceFuture<'_, Vec<ReadingLink>>;

    /// Fetches one reading page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched or carries no reading heading.
    fn reading_page(&self, link: &ReadingLink) -> SourceFuture<'_, RawReading>;

    /// Lists the full names of the day's commemorated feasts and saints.
    ///
    /// # Errors
    ///
    /// Returns an error if the day page cannot be fetched.
    fn commemorations(&self, date: NaiveDate) -> SourceFuture<'_, Vec<String>>;
}
