//! Tolerant HTML text helpers for scraping.
//!
//! Pages are read with case-insensitive regexes over known blocks rather
//! than a full DOM; these helpers turn a fragment into plain text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("entity pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Replaces every tag with a space.
#[must_use]
pub fn strip_tags(fragment: &str) -> String {
    TAG.replace_all(fragment, " ").into_owned()
}

/// Decodes numeric and common named character references.
///
/// Unknown named entities are left as written.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            let name = &caps[1];
            let hex = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"));
            let decoded = if let Some(hex) = hex {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(name)
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "aelig" => '\u{E6}',
        "AElig" => '\u{C6}',
        "oelig" => '\u{153}',
        "OElig" => '\u{152}',
        _ => return None,
    })
}

/// Collapses runs of whitespace into single spaces and trims.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Visible text of a fragment: tags stripped, entities decoded, whitespace collapsed.
#[must_use]
pub fn text_of(fragment: &str) -> String {
    collapse_whitespace(&decode_entities(&strip_tags(fragment)))
}
