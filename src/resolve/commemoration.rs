//! Matching an abbreviated saint reference against the day's commemorations.
//!
//! The two sources share no identifiers, so this is a ranked whole-word
//! lookup with an explicit [`CommemorationMatch::Unmatched`] outcome.

use tracing::debug;

/// Leading title words that never identify a saint.
const HONORIFICS: &[&str] =
    &["st", "sts", "saint", "saints", "ven", "venerable", "holy", "the", "blessed"];

/// Words dropped from an abbreviation's core tokens.
const CONNECTORS: &[&str] = &["and", "of", "the"];

/// Outcome of a commemoration lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommemorationMatch<'a> {
    /// Exactly one full name was chosen.
    Matched(&'a str),
    /// No commemoration carries every core token.
    Unmatched,
}

/// Lowercased alphanumeric words of `text`.
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn strip_honorifics(words: &[String]) -> &[String] {
    let start =
        words.iter().position(|w| !HONORIFICS.contains(&w.as_str())).unwrap_or(words.len());
    &words[start..]
}

/// Normalizes an abbreviation such as `"St Basil the Great"` into `["basil", "great"]`.
#[must_use]
pub fn core_tokens(abbreviation: &str) -> Vec<String> {
    let all = words(abbreviation);
    let mut tokens: Vec<String> = Vec::new();
    for word in strip_honorifics(&all) {
        if CONNECTORS.contains(&word.as_str()) || tokens.contains(word) {
            continue;
        }
        tokens.push(word.clone());
    }
    tokens
}

/// Ranking key; the smallest key wins.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    /// Some core token is missing from the text before the first comma.
    outside_principal: bool,
    /// Position of the first core token once leading honorifics are removed.
    anchor: usize,
    /// Difference between the name's token count and the abbreviation's.
    distance: usize,
    /// Source list order.
    position: usize,
}

fn rank(tokens: &[String], name: &str, position: usize) -> Option<Rank> {
    let name_words = words(name);
    if !tokens.iter().all(|t| name_words.contains(t)) {
        return None;
    }

    let principal = words(name.split(',').next().unwrap_or_default());
    let stripped = strip_honorifics(&name_words);
    let anchor = stripped.iter().position(|w| tokens.contains(w)).unwrap_or(usize::MAX);

    Some(Rank {
        outside_principal: !tokens.iter().all(|t| principal.contains(t)),
        anchor,
        distance: stripped.len().abs_diff(tokens.len()),
        position,
    })
}

/// Resolves `abbreviation` to one of `commemorations`.
///
/// A name qualifies when every core token of the abbreviation appears in it
/// as a whole word. Among several qualifying names the one whose principal
/// clause names the saint wins, then the earliest anchor, then the closest
/// token count, then source order.
#[must_use]
pub fn match_commemoration<'a>(
    abbreviation: &str,
    commemorations: &'a [String],
) -> CommemorationMatch<'a> {
    let tokens = core_tokens(abbreviation);
    if tokens.is_empty() {
        debug!(abbreviation, "abbreviation has no core tokens");
        return CommemorationMatch::Unmatched;
    }

    let best = commemorations
        .iter()
        .enumerate()
        .filter_map(|(position, name)| rank(&tokens, name, position).map(|r| (r, name)))
        .min_by(|a, b| a.0.cmp(&b.0));

    match best {
        Some((_, name)) => {
            debug!(abbreviation, name = name.as_str(), "matched commemoration");
            CommemorationMatch::Matched(name)
        }
        None => {
            debug!(abbreviation, "no commemoration matched");
            CommemorationMatch::Unmatched
        }
    }
}
