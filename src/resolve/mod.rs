//! Occasion resolution for one day.
//!
//! Pure functions over fully fetched inputs: the same [`DayInputs`] always
//! resolve to the same readings, and nothing here performs I/O or fails.

mod builder;
mod commemoration;
mod occasion;

pub use builder::build_reading_set;
pub use commemoration::{core_tokens, match_commemoration, CommemorationMatch};
pub use occasion::{
    normalize_reference, resolve_occasion, week_ordinal_phrase, Occasion, ARTICLE, SAINT,
};

use crate::readings::{Day, LiturgicalInfo, RawReading, ResolvedReading};

/// Everything the sources returned for a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayInputs {
    /// Primary-source readings in any order.
    pub readings: Vec<RawReading>,
    /// Full commemoration names in source order.
    pub commemorations: Vec<String>,
    /// Secondary-source titles and descriptions.
    pub info: LiturgicalInfo,
}

/// Resolves every reading's occasion and builds the final reading set.
#[must_use]
pub fn resolve_day(day: &Day, inputs: &DayInputs) -> Vec<ResolvedReading> {
    let resolved = inputs
        .readings
        .iter()
        .map(|raw| {
            let phrase = resolve_occasion(raw, &inputs.info.titles, &inputs.info.descriptions)
                .into_phrase(&inputs.commemorations);
            ResolvedReading::new(raw.clone(), phrase)
        })
        .collect();
    build_reading_set(day, resolved)
}
