//! Metadata from the secondary (orthocal) source.

use serde::{Deserialize, Serialize};

/// A phrase naming the liturgical day, e.g. `"Thursday of the 30th week after Pentecost"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiturgicalTitle(pub String);

impl LiturgicalTitle {
    /// The title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A short description of one appointed reading, e.g. type `Epistle`, description `"St Basil"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingDescription {
    /// Reading type hint as the secondary source spells it.
    pub reading_type: String,
    /// Abbreviated occasion reference.
    pub description: String,
    /// Verse reference as displayed by the secondary source, if any.
    #[serde(default)]
    pub verse_reference: Option<String>,
}

/// Everything the secondary source knows about a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalInfo {
    /// Day titles in source order.
    #[serde(default)]
    pub titles: Vec<LiturgicalTitle>,
    /// Reading descriptions in source order.
    #[serde(default)]
    pub descriptions: Vec<ReadingDescription>,
}
