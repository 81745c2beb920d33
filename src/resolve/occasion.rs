//! Turning a primary-source occasion token into a final occasion phrase.

use std::sync::LazyLock;

use chrono::Weekday;
use regex::Regex;

use super::commemoration::{core_tokens, match_commemoration, CommemorationMatch};
use crate::readings::{LiturgicalTitle, RawReading, ReadingDescription};

/// The bare category the primary source uses for an unnamed saint.
pub const SAINT: &str = "Saint";

/// A bare article standing in for an occasion the primary source leaves unnamed.
pub const ARTICLE: &str = "The";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static POSITIONAL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\w*\s+reading$").expect("positional label pattern is valid")
});

static WEEK_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\w+)\s+of\s+the\s+(\d+(?:st|nd|rd|th))\s+week\s+after\s+(.+)$")
        .expect("week ordinal pattern is valid")
});

static ORDINAL_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:st|nd|rd|th))\s+(\w+)\s+after\s+(.+)$")
        .expect("ordinal weekday pattern is valid")
});

static COMPOSITE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^composite\s+\d+\s*-\s*").expect("composite prefix pattern is valid")
});

/// Resolver verdict for one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occasion {
    /// The final phrase, possibly empty.
    Phrase(String),
    /// An unnamed saint that still needs the commemoration list.
    Saint {
        /// Phrase used when no name can be found.
        fallback: String,
        /// Abbreviated name taken from the secondary source, if any.
        abbreviation: Option<String>,
    },
}

impl Occasion {
    /// Produces the final phrase, consulting `commemorations` for saints.
    #[must_use]
    pub fn into_phrase(self, commemorations: &[String]) -> String {
        match self {
            Self::Phrase(phrase) => phrase,
            Self::Saint { fallback, abbreviation } => {
                match abbreviation.as_deref().map(|a| match_commemoration(a, commemorations)) {
                    Some(CommemorationMatch::Matched(name)) => name.to_string(),
                    Some(CommemorationMatch::Unmatched) | None => fallback,
                }
            }
        }
    }
}

/// Decides the occasion of `reading` from its own token and the secondary source.
///
/// A non-empty token other than a bare category is used as is. An empty
/// token takes the first week-ordinal day title. A bare saint token looks for
/// an abbreviation among the descriptions of the same reading type and falls
/// back to itself. A bare article does the same lookup but falls back like an
/// empty token.
#[must_use]
pub fn resolve_occasion(
    reading: &RawReading,
    titles: &[LiturgicalTitle],
    descriptions: &[ReadingDescription],
) -> Occasion {
    let token = normalize_token(&reading.occasion_token);

    if token.is_empty() {
        return Occasion::Phrase(title_phrase(titles));
    }

    if token.eq_ignore_ascii_case(SAINT) {
        let abbreviation = saint_abbreviation(reading, descriptions);
        return Occasion::Saint { fallback: token, abbreviation };
    }

    if token.eq_ignore_ascii_case(ARTICLE) {
        let abbreviation = saint_abbreviation(reading, descriptions);
        return Occasion::Saint { fallback: title_phrase(titles), abbreviation };
    }

    Occasion::Phrase(token)
}

fn title_phrase(titles: &[LiturgicalTitle]) -> String {
    titles.iter().find_map(|t| week_ordinal_phrase(t.as_str())).unwrap_or_default()
}

/// Collapses whitespace and drops positional labels like `"1st reading"`.
fn normalize_token(raw: &str) -> String {
    let token = WHITESPACE.replace_all(raw.trim(), " ").into_owned();
    if POSITIONAL_LABEL.is_match(&token) {
        String::new()
    } else {
        token
    }
}

/// `"Thursday of the 30th week after Pentecost"` becomes `"the 30th Thursday after Pentecost"`.
///
/// Titles already shaped like `"30th Sunday after Pentecost"` only gain the
/// article. Returns `None` when the title is not a weekday/week-ordinal phrase.
#[must_use]
pub fn week_ordinal_phrase(title: &str) -> Option<String> {
    let title = title.trim();
    let (weekday, ordinal, feast) = if let Some(caps) = WEEK_ORDINAL.captures(title) {
        (caps.get(1)?.as_str(), caps.get(2)?.as_str(), caps.get(3)?.as_str())
    } else {
        let caps = ORDINAL_WEEKDAY.captures(title)?;
        (caps.get(2)?.as_str(), caps.get(1)?.as_str(), caps.get(3)?.as_str())
    };
    let weekday = weekday.parse::<Weekday>().ok()?;
    let ordinal = ordinal.to_lowercase();
    Some(format!("the {ordinal} {} after {}", weekday_name(weekday), feast.trim()))
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Picks the secondary source's abbreviation for a saint reading.
///
/// Descriptions of the same type whose verse reference matches the reading
/// are preferred over the first description of that type.
fn saint_abbreviation(
    reading: &RawReading,
    descriptions: &[ReadingDescription],
) -> Option<String> {
    let candidates: Vec<&ReadingDescription> = descriptions
        .iter()
        .filter(|d| d.reading_type.trim().eq_ignore_ascii_case(reading.reading_type.trim()))
        .filter(|d| is_abbreviation(&d.description))
        .collect();

    let wanted = normalize_reference(&reading.verse_reference);
    candidates
        .iter()
        .find(|d| d.verse_reference.as_deref().map(normalize_reference).as_ref() == Some(&wanted))
        .or_else(|| candidates.first())
        .map(|d| d.description.trim().to_string())
}

/// Week ordinals and title-only descriptions do not name a saint.
fn is_abbreviation(description: &str) -> bool {
    let description = description.trim();
    !description.starts_with(|c: char| c.is_ascii_digit()) && !core_tokens(description).is_empty()
}

/// Reduces a verse reference to a comparable key: `"Hebrews 7:26-8:2"` and
/// `"Composite 1 - Hebrews 7.26-8.2"` both become `"hebrews726-82"`.
#[must_use]
pub fn normalize_reference(reference: &str) -> String {
    COMPOSITE_PREFIX
        .replace(reference.trim(), "")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .flat_map(char::to_lowercase)
        .collect()
}
