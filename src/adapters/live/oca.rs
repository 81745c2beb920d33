//! Live adapter for the `PrimarySource` port, scraping oca.org daily readings.

use std::collections::BTreeMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use chrono::NaiveDate;
use regex::Regex;
use reqwest::Client;
use tracing::debug;

use super::html::{collapse_whitespace, text_of};
use super::{build_client, get_text};
use crate::config::SourceConfig;
use crate::ports::{PrimarySource, SourceError, SourceFuture};
use crate::readings::{RawReading, ReadingLink, MATINS_GOSPEL};

static READING_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<a\s[^>]*?href\s*=\s*["'][^"']*?(/readings/daily/(\d{4})/(\d{2})/(\d{2})/(\d+))/?["'][^>]*>(.*?)</a>"#,
    )
    .expect("reading link pattern is valid")
});

static H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h3[^>]*>(.*?)</h3>").expect("h3 pattern is valid"));

static COMMEMORATED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)today.s commemorated").expect("commemoration heading pattern is valid")
});

static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p>").expect("paragraph pattern is valid")
});

static STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<strong[^>]*>(.*?)</strong>").expect("strong pattern is valid")
});

static TRAILING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d{4}\)\s*$").expect("year pattern is valid"));

static SAINT_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bSt\.\s+").expect("saint abbreviation pattern is valid"));

static VENERABLE_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bVen\.\s+").expect("venerable abbreviation pattern is valid"));

static H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").expect("h2 pattern is valid"));

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("parenthesis pattern is valid"));

static ORDINAL_MATINS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\d+\w+\s+({MATINS_GOSPEL})$")).expect("matins ordinal pattern is valid")
});

static READING_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<dl[^>]*class\s*=\s*["'][^"']*\breading\b[^"']*["'][^>]*>(.*?)</dl>"#)
        .expect("reading list pattern is valid")
});

static VERSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<dd[^>]*>(.*?)</dd>").expect("verse pattern is valid"));

/// Scrapes the OCA daily readings pages.
///
/// The day index and the commemorations live on the same page, which is
/// fetched once per date and reused.
pub struct LiveOcaSource {
    client: Client,
    base: String,
    day_page: DayPageCache,
}

/// The most recently fetched day page.
#[derive(Default)]
struct DayPageCache(Mutex<Option<(NaiveDate, String)>>);

impl DayPageCache {
    fn get(&self, date: NaiveDate) -> Option<String> {
        let cached = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        cached.as_ref().filter(|(d, _)| *d == date).map(|(_, html)| html.clone())
    }

    fn put(&self, date: NaiveDate, html: &str) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some((date, html.to_string()));
    }
}

impl LiveOcaSource {
    /// Creates a live OCA source from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_client(config)?,
            base: config.oca_base.clone(),
            day_page: DayPageCache::default(),
        })
    }

    fn day_url(&self, date: NaiveDate) -> String {
        format!("{}/readings/daily/{}", self.base, date.format("%Y/%m/%d"))
    }

    async fn fetch_day_page(&self, date: NaiveDate) -> Result<String, SourceError> {
        if let Some(html) = self.day_page.get(date) {
            debug!(%date, "reusing fetched day page");
            return Ok(html);
        }
        let html = get_text(&self.client, &self.day_url(date)).await?;
        self.day_page.put(date, &html);
        Ok(html)
    }
}

impl PrimarySource for LiveOcaSource {
    fn day_index(&self, date: NaiveDate) -> SourceFuture<'_, Vec<ReadingLink>> {
        Box::pin(async move {
            let html = self.fetch_day_page(date).await?;
            Ok(parse_day_index(&html, date))
        })
    }

    fn reading_page(&self, link: &ReadingLink) -> SourceFuture<'_, RawReading> {
        let link = link.clone();
        Box::pin(async move {
            let url = format!("{}{}", self.base, link.path);
            let html = get_text(&self.client, &url).await?;
            parse_reading_page(&html, &link)
                .ok_or_else(|| SourceError::Parse {
                    url,
                    message: "no reading heading".to_string(),
                })
        })
    }

    fn commemorations(&self, date: NaiveDate) -> SourceFuture<'_, Vec<String>> {
        Box::pin(async move {
            let html = self.fetch_day_page(date).await?;
            Ok(parse_commemorations(&html))
        })
    }
}

/// Extracts the reading links for `date`, deduplicated and sorted by index.
#[must_use]
pub fn parse_day_index(html: &str, date: NaiveDate) -> Vec<ReadingLink> {
    let wanted = date.format("%Y/%m/%d").to_string();
    let mut links: BTreeMap<u32, ReadingLink> = BTreeMap::new();

    for caps in READING_LINK.captures_iter(html) {
        if format!("{}/{}/{}", &caps[2], &caps[3], &caps[4]) != wanted {
            continue;
        }
        let Ok(sequence_index) = caps[5].parse::<u32>() else {
            continue;
        };
        links.entry(sequence_index).or_insert_with(|| ReadingLink {
            sequence_index,
            path: caps[1].to_string(),
            label: text_of(&caps[6]),
        });
    }

    links.into_values().collect()
}

/// Extracts the `<strong>` names following the commemorations heading.
#[must_use]
pub fn parse_commemorations(html: &str) -> Vec<String> {
    let Some(heading) =
        H3.captures_iter(html).find(|c| COMMEMORATED_HEADING.is_match(&text_of(&c[1])))
    else {
        return Vec::new();
    };
    let after = heading.get(0).map_or(html.len(), |m| m.end());
    let Some(paragraph) = PARAGRAPH.captures(&html[after..]) else {
        return Vec::new();
    };

    STRONG
        .captures_iter(&paragraph[1])
        .map(|c| clean_commemoration(&text_of(&c[1])))
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn clean_commemoration(entry: &str) -> String {
    let entry = TRAILING_YEAR.replace(entry, "");
    let entry = replace_ligatures(&entry);
    let entry = SAINT_ABBREVIATION.replace_all(&entry, "Saint ");
    let entry = VENERABLE_ABBREVIATION.replace_all(&entry, "Venerable ");
    collapse_whitespace(&entry)
}

fn replace_ligatures(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{E6}' => out.push_str("ae"),
            '\u{C6}' => out.push_str("Ae"),
            '\u{153}' => out.push_str("oe"),
            '\u{152}' => out.push_str("Oe"),
            '\u{107}' | '\u{10D}' => out.push('c'),
            other => out.push(other),
        }
    }
    out
}

/// Parses a reading page heading such as `"Hebrews 7:26-8:2 (Epistle, Saint)"`
/// and the verses of its reading list.
///
/// Returns `None` when the page has no parenthesized heading or no reading type.
#[must_use]
pub fn parse_reading_page(html: &str, link: &ReadingLink) -> Option<RawReading> {
    let heading = H2
        .captures_iter(html)
        .map(|c| text_of(&c[1]))
        .find(|text| text.contains('(') && text.contains(')'))?;

    let verse_reference = heading.split('(').next().unwrap_or_default().trim().to_string();
    let inner = PARENTHESIZED.captures(&heading)?;
    let mut parts = inner[1].splitn(2, ',').map(str::trim);
    let raw_type = parts.next().unwrap_or_default();
    let occasion_token = parts.next().unwrap_or_default().to_string();

    let reading_type = ORDINAL_MATINS.replace(raw_type, "$1").trim().to_string();
    if reading_type.is_empty() {
        return None;
    }

    let passage_text = READING_LIST
        .captures(html)
        .map(|list| {
            VERSE
                .captures_iter(&list[1])
                .map(|c| text_of(&c[1]))
                .filter(|verse| !verse.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    Some(RawReading {
        reading_type,
        occasion_token,
        verse_reference: if verse_reference.is_empty() {
            link.label.clone()
        } else {
            verse_reference
        },
        passage_text,
        sequence_index: link.sequence_index,
    })
}
