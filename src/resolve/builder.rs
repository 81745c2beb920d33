//! Final inclusion and ordering of a day's resolved readings.

use crate::readings::{Day, ResolvedReading};

/// Applies the Sunday-only Matins Gospel rule and orders by `sequence_index`.
///
/// Every other reading type is kept and a repeated index keeps its first
/// reading. An empty result is a valid outcome.
#[must_use]
pub fn build_reading_set(day: &Day, mut readings: Vec<ResolvedReading>) -> Vec<ResolvedReading> {
    let sunday = day.is_sunday();
    readings.retain(|r| sunday || !r.is_matins_gospel());
    readings.sort_by_key(ResolvedReading::sequence_index);
    readings.dedup_by_key(|r| r.sequence_index());
    readings
}
