//! Markdown document assembly for a day's reading set.

use crate::readings::{Day, ResolvedReading, MATINS_GOSPEL};

/// Link base for the day index and the per-reading pages.
const LINK_BASE: &str = "oca.org/readings/daily";

/// Fixed footer line.
pub const HASHTAGS: &str =
    "#Christian #OrthodoxChristian #Bible #Scripture #Orthodox #Orthostr #Biblestr";

/// Renders the title, one section per reading and the footer.
///
/// An empty reading set still produces a title and footer.
#[must_use]
pub fn render(day: &Day, readings: &[ResolvedReading]) -> String {
    let date_path = day.path();
    let mut lines = vec![
        format!("# [Scripture Readings for {} (OCA)]({LINK_BASE}/{date_path})", day.title()),
        String::new(),
    ];

    if readings.is_empty() {
        lines.push("*No readings found for this date.*".to_string());
        lines.push(String::new());
    }

    for reading in readings {
        lines.push(format!(
            "## [{}]({LINK_BASE}/{date_path}/{})",
            heading(reading),
            reading.sequence_index()
        ));
        lines.push(String::new());

        if !reading.passage_text().is_empty() {
            lines.push(format!("> {}", reading.passage_text()));
            lines.push(String::new());
        }
    }

    lines.push(HASHTAGS.to_string());
    lines.push(String::new());
    lines.join("\n")
}

fn heading(reading: &ResolvedReading) -> String {
    let verse = reading.verse_reference();
    if reading.is_matins_gospel() {
        return format!("{MATINS_GOSPEL} reading ({verse})");
    }
    match occasion_clause(reading.occasion_phrase()) {
        Some(occasion) => format!("{} reading for {occasion} ({verse})", reading.reading_type()),
        None => format!("{} reading ({verse})", reading.reading_type()),
    }
}

/// Articles an occasion for "reading for ...": `"Circumcision"` reads
/// `"the Circumcision"`, saints keep their title.
fn occasion_clause(phrase: &str) -> Option<String> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return None;
    }
    if let Some(rest) = phrase.strip_prefix("The ") {
        return Some(format!("the {rest}"));
    }

    let first = phrase.split_whitespace().next().unwrap_or_default();
    if matches!(first, "the" | "Saint" | "Saints" | "St" | "St." | "Sts" | "Sts.") {
        Some(phrase.to_string())
    } else {
        Some(format!("the {phrase}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::RawReading;
    use chrono::NaiveDate;

    fn resolved(index: u32, reading_type: &str, occasion: &str, text: &str) -> ResolvedReading {
        ResolvedReading::new(
            RawReading {
                reading_type: reading_type.to_string(),
                occasion_token: String::new(),
                verse_reference: format!("Luke {index}:1-10"),
                passage_text: text.to_string(),
                sequence_index: index,
            },
            occasion,
        )
    }

    fn day() -> Day {
        Day::new(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap())
    }

    #[test]
    fn renders_title_sections_and_footer() {
        let doc = render(
            &day(),
            &[
                resolved(1, "Matins Gospel", "", "Jesus showed Himself again."),
                resolved(2, "Epistle", "Saint Basil the Great", "For such a High Priest."),
            ],
        );
        let expected = "\
# [Scripture Readings for Sunday, 18 January 2026 (OCA)](oca.org/readings/daily/2026/01/18)

## [Matins Gospel reading (Luke 1:1-10)](oca.org/readings/daily/2026/01/18/1)

> Jesus showed Himself again.

## [Epistle reading for Saint Basil the Great (Luke 2:1-10)](oca.org/readings/daily/2026/01/18/2)

> For such a High Priest.

#Christian #OrthodoxChristian #Bible #Scripture #Orthodox #Orthostr #Biblestr
";
        assert_eq!(doc, expected);
    }

    #[test]
    fn empty_set_keeps_title_and_footer() {
        let doc = render(&day(), &[]);
        assert!(doc.starts_with("# [Scripture Readings for Sunday, 18 January 2026 (OCA)]"));
        assert!(doc.contains("*No readings found for this date.*"));
        assert!(doc.trim_end().ends_with(HASHTAGS));
        assert!(!doc.contains("## "));
    }

    #[test]
    fn empty_passage_omits_blockquote() {
        let doc = render(&day(), &[resolved(3, "Gospel", "", "")]);
        assert!(doc.contains("## [Gospel reading (Luke 3:1-10)](oca.org/readings/daily/2026/01/18/3)"));
        assert!(!doc.contains("> "));
    }

    #[test]
    fn occasions_are_articled() {
        assert_eq!(occasion_clause("Circumcision").as_deref(), Some("the Circumcision"));
        assert_eq!(
            occasion_clause("The Circumcision of our Lord").as_deref(),
            Some("the Circumcision of our Lord")
        );
        assert_eq!(
            occasion_clause("the 30th Thursday after Pentecost").as_deref(),
            Some("the 30th Thursday after Pentecost")
        );
        assert_eq!(occasion_clause("Saint").as_deref(), Some("Saint"));
        assert_eq!(occasion_clause("  ").as_deref(), None);
    }
}
