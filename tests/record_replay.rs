//! End-to-end replay of a recorded day.
//!
//! Builds a cassette with `CassetteRecorder` the way a recording run would,
//! replays it through the binary, and checks the rendered document.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::{json, Value};

use lectionary::cassette::recorder::CassetteRecorder;

fn reading(index: u32, reading_type: &str, token: &str, verse: &str, text: &str) -> Value {
    json!({"Ok": {
        "reading_type": reading_type,
        "occasion_token": token,
        "verse_reference": verse,
        "passage_text": text,
        "sequence_index": index,
    }})
}

fn link(date_path: &str, index: u32) -> Value {
    json!({
        "sequence_index": index,
        "path": format!("/readings/daily/{date_path}/{index}"),
        "label": format!("Reading {index}"),
    })
}

/// Records New Year's Day 2026: a feast, a saint and a Matins Gospel on a Thursday.
fn record_new_year(path: &Path) {
    let mut rec = CassetteRecorder::new(path, "2026-01-01");
    let date = json!("2026-01-01");
    rec.record(
        "orthocal",
        "liturgical_info",
        date.clone(),
        json!({"Ok": {
            "titles": ["Thursday of the 30th week after Pentecost"],
            "descriptions": [
                {"reading_type": "Epistle", "description": "St Basil", "verse_reference": "Hebrews 7.26-8.2"},
                {"reading_type": "Gospel", "description": "St Basil", "verse_reference": "Luke 6.17-23"}
            ]
        }}),
    );
    rec.record(
        "oca",
        "day_index",
        date.clone(),
        json!({"Ok": [
            link("2026/01/01", 1),
            link("2026/01/01", 2),
            link("2026/01/01", 3),
            link("2026/01/01", 4),
            link("2026/01/01", 5),
        ]}),
    );
    rec.record(
        "oca",
        "commemorations",
        date,
        json!({"Ok": [
            "Circumcision of our Lord",
            "Saint Basil the Great, Archbishop of Caesarea in Cappadocia",
            "Saint Emilia, Mother of Saint Basil the Great",
        ]}),
    );
    let pages = [
        reading(1, "Matins Gospel", "", "John 10:9-16", "I am the door."),
        reading(2, "Epistle", "Circumcision", "Colossians 2:8-12", "Beware lest anyone cheat you."),
        reading(3, "Gospel", "Circumcision", "Luke 2:20-21, 40-52", "Then the shepherds returned."),
        reading(
            4,
            "Epistle",
            "Saint",
            "Hebrews 7:26-8:2",
            "For such a High Priest was fitting for us.",
        ),
        reading(5, "Epistle", "", "Hebrews 10:35-11:7", ""),
    ];
    for page in pages {
        rec.record("oca", "reading_page", Value::Null, page);
    }
    rec.finish().expect("cassette should be written");
}

fn replay(path: &Path, date: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_lectionary"))
        .args(["--replay", path.to_str().unwrap(), date])
        .env_remove("LECTIONARY_RECORD")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run lectionary binary")
}

fn cassette_path(test: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("lectionary_record_replay_{test}"));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("2026-01-01.cassette.yaml");
    (dir, path)
}

#[test]
fn replayed_day_renders_resolved_occasions() {
    let (dir, path) = cassette_path("render");
    record_new_year(&path);

    let output = replay(&path, "2026-01-01");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let expected = "\
# [Scripture Readings for Thursday, 01 January 2026 (OCA)](oca.org/readings/daily/2026/01/01)

## [Epistle reading for the Circumcision (Colossians 2:8-12)](oca.org/readings/daily/2026/01/01/2)

> Beware lest anyone cheat you.

## [Gospel reading for the Circumcision (Luke 2:20-21, 40-52)](oca.org/readings/daily/2026/01/01/3)

> Then the shepherds returned.

## [Epistle reading for Saint Basil the Great, Archbishop of Caesarea in Cappadocia (Hebrews 7:26-8:2)](oca.org/readings/daily/2026/01/01/4)

> For such a High Priest was fitting for us.

## [Epistle reading for the 30th Thursday after Pentecost (Hebrews 10:35-11:7)](oca.org/readings/daily/2026/01/01/5)

#Christian #OrthodoxChristian #Bible #Scripture #Orthodox #Orthostr #Biblestr
";
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replay_is_deterministic() {
    let (dir, path) = cassette_path("determinism");
    record_new_year(&path);

    let first = replay(&path, "2026-01-01");
    let second = replay(&path, "2026-01-01");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sunday_keeps_the_matins_gospel() {
    let (dir, path) = cassette_path("sunday");
    record_new_year(&path);

    // Same recorded sources, rendered for a Sunday.
    let output = replay(&path, "2026-01-04");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Sunday, 04 January 2026"));
    assert!(stdout.contains("## [Matins Gospel reading (John 10:9-16)](oca.org/readings/daily/2026/01/04/1)"));
    assert_eq!(stdout.matches("Matins Gospel").count(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}
