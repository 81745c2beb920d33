//! The calendar day a run works on.

use chrono::{Datelike, NaiveDate, Weekday};

/// A calendar date plus the derived facts the resolver and renderer need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
}

impl Day {
    /// Wrap a date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day of the week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns `true` on Sundays.
    #[must_use]
    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }

    /// Human title, e.g. `"Sunday, 18 January 2026"`.
    #[must_use]
    pub fn title(&self) -> String {
        self.date.format("%A, %d %B %Y").to_string()
    }

    /// Date path segment used by the primary source, e.g. `"2026/01/18"`.
    #[must_use]
    pub fn path(&self) -> String {
        self.date.format("%Y/%m/%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn title_spells_weekday_and_month() {
        assert_eq!(day(2026, 1, 18).title(), "Sunday, 18 January 2026");
        assert_eq!(day(2026, 1, 1).title(), "Thursday, 01 January 2026");
    }

    #[test]
    fn path_is_zero_padded() {
        assert_eq!(day(2026, 3, 7).path(), "2026/03/07");
    }

    #[test]
    fn detects_sunday() {
        assert!(day(2026, 1, 18).is_sunday());
        assert!(!day(2026, 1, 19).is_sunday());
    }
}
