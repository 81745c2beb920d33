//! The resolver's output unit.

use super::raw::{RawReading, MATINS_GOSPEL};

/// A reading with its final occasion phrase attached.
///
/// Fields are private; a resolved reading is not changed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReading {
    reading_type: String,
    occasion_phrase: String,
    verse_reference: String,
    passage_text: String,
    sequence_index: u32,
}

impl ResolvedReading {
    /// Attach an occasion phrase to a raw reading.
    #[must_use]
    pub fn new(raw: RawReading, occasion_phrase: impl Into<String>) -> Self {
        Self {
            reading_type: raw.reading_type,
            occasion_phrase: occasion_phrase.into(),
            verse_reference: raw.verse_reference,
            passage_text: raw.passage_text,
            sequence_index: raw.sequence_index,
        }
    }

    /// Free-text reading type.
    #[must_use]
    pub fn reading_type(&self) -> &str {
        &self.reading_type
    }

    /// Final occasion phrase; may be empty.
    #[must_use]
    pub fn occasion_phrase(&self) -> &str {
        &self.occasion_phrase
    }

    /// Verse reference.
    #[must_use]
    pub fn verse_reference(&self) -> &str {
        &self.verse_reference
    }

    /// Passage text; may be empty.
    #[must_use]
    pub fn passage_text(&self) -> &str {
        &self.passage_text
    }

    /// Position on the primary source's page.
    #[must_use]
    pub fn sequence_index(&self) -> u32 {
        self.sequence_index
    }

    /// Returns `true` when this reading is the Sunday-only Matins Gospel.
    #[must_use]
    pub fn is_matins_gospel(&self) -> bool {
        self.reading_type == MATINS_GOSPEL
    }
}
