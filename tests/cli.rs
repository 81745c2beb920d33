//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_lectionary(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_lectionary");
    Command::new(bin)
        .args(args)
        .env_remove("LECTIONARY_RECORD")
        .env_remove("LECTIONARY_REPLAY")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run lectionary binary")
}

#[test]
fn help_shows_usage() {
    let output = run_lectionary(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("[DATE]"));
    assert!(stdout.contains("--replay"));
    assert!(stdout.contains("--record"));
}

#[test]
fn invalid_date_exits_with_error() {
    let output = run_lectionary(&["2026-13-01"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("2026-13-01"));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_cassette_exits_with_error() {
    let output = run_lectionary(&["--replay", "/nonexistent/day.cassette.yaml", "2026-01-01"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read cassette file"));
}

#[test]
fn record_and_replay_together_are_rejected() {
    let output = run_lectionary(&["--record", "a.yaml", "--replay", "b.yaml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("cannot be used with"));
}
