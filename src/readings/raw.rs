//! Readings as scraped from the primary source.

use serde::{Deserialize, Serialize};

/// The reading type that is only read on Sundays.
pub const MATINS_GOSPEL: &str = "Matins Gospel";

/// One entry of the primary source's day index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingLink {
    /// 1-based position on the day page; also the per-reading link suffix.
    pub sequence_index: u32,
    /// Path of the reading page, relative to the source base.
    pub path: String,
    /// Anchor text, used when the reading page carries no verse reference.
    pub label: String,
}

/// One reading as published by the primary source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReading {
    /// Free-text reading type (`"Epistle"`, `"6th Hour"`, ...).
    pub reading_type: String,
    /// Occasion marker; may be empty, a bare category or a full phrase.
    #[serde(default)]
    pub occasion_token: String,
    /// Book plus chapter:verse range.
    pub verse_reference: String,
    /// Passage text, preserved verbatim.
    #[serde(default)]
    pub passage_text: String,
    /// Position on the source's page.
    pub sequence_index: u32,
}
