//! Live adapter for the `SecondarySource` port using the orthocal.info API.

use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::Deserialize;

use super::{build_client, get_text};
use crate::config::SourceConfig;
use crate::ports::{SecondarySource, SourceError, SourceFuture};
use crate::readings::{LiturgicalInfo, LiturgicalTitle, ReadingDescription};

/// Reads day titles and reading descriptions from orthocal.info.
pub struct LiveOrthocalSource {
    client: Client,
    base: String,
}

impl LiveOrthocalSource {
    /// Creates a live orthocal source from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        Ok(Self { client: build_client(config)?, base: config.orthocal_base.clone() })
    }
}

/// Day response from the orthocal Gregorian endpoint.
#[derive(Deserialize)]
struct OrthocalDay {
    #[serde(default)]
    titles: Vec<Option<String>>,
    #[serde(default)]
    readings: Vec<OrthocalReading>,
}

/// One appointed reading in the orthocal response.
#[derive(Deserialize)]
struct OrthocalReading {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    display: Option<String>,
    #[serde(default)]
    short_display: Option<String>,
}

impl SecondarySource for LiveOrthocalSource {
    fn liturgical_info(&self, date: NaiveDate) -> SourceFuture<'_, LiturgicalInfo> {
        Box::pin(async move {
            let url = format!("{}/{}/{}/{}/", self.base, date.year(), date.month(), date.day());
            let body = get_text(&self.client, &url).await?;
            parse_day(&body).map_err(|e| SourceError::Parse { url, message: e.to_string() })
        })
    }
}

/// Converts an orthocal day document into titles and reading descriptions.
///
/// # Errors
///
/// Returns an error if `body` is not an orthocal day document.
pub fn parse_day(body: &str) -> Result<LiturgicalInfo, serde_json::Error> {
    let day: OrthocalDay = serde_json::from_str(body)?;

    let titles = day
        .titles
        .into_iter()
        .flatten()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .map(LiturgicalTitle)
        .collect();

    let descriptions = day
        .readings
        .into_iter()
        .map(|r| ReadingDescription {
            reading_type: r.source.unwrap_or_default().trim().to_string(),
            description: r.description.unwrap_or_default().trim().to_string(),
            verse_reference: r.display.or(r.short_display).filter(|v| !v.trim().is_empty()),
        })
        .collect();

    Ok(LiturgicalInfo { titles, descriptions })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_titles_and_descriptions() {
        let body = r#"{
            "titles": ["Thursday of the 30th week after Pentecost", null, ""],
            "readings": [
                {"source": "Epistle", "description": "St Basil", "display": "Hebrews 7.26-8.2"},
                {"source": "Gospel", "description": null, "short_display": "Luke 6.17-23"},
                {"source": "Matins Gospel", "description": ""}
            ]
        }"#;
        let info = parse_day(body).unwrap();

        assert_eq!(
            info.titles,
            vec![LiturgicalTitle("Thursday of the 30th week after Pentecost".to_string())]
        );
        assert_eq!(info.descriptions.len(), 3);
        assert_eq!(info.descriptions[0].description, "St Basil");
        assert_eq!(info.descriptions[0].verse_reference.as_deref(), Some("Hebrews 7.26-8.2"));
        assert_eq!(info.descriptions[1].description, "");
        assert_eq!(info.descriptions[1].verse_reference.as_deref(), Some("Luke 6.17-23"));
        assert_eq!(info.descriptions[2].verse_reference, None);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let info = parse_day("{}").unwrap();
        assert_eq!(info, LiturgicalInfo::default());
    }

    #[test]
    fn rejects_non_json() {
        assert!(parse_day("<html>maintenance</html>").is_err());
    }
}
