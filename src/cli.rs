//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Top-level CLI parser for `lectionary`.
#[derive(Debug, Parser)]
#[command(
    name = "lectionary",
    version,
    about = "Print the day's scripture readings as markdown"
)]
pub struct Cli {
    /// Date to fetch readings for (YYYY-MM-DD). Defaults to today.
    pub date: Option<NaiveDate>,

    /// Record every source interaction into this cassette file.
    #[arg(long, env = "LECTIONARY_RECORD", value_name = "CASSETTE", conflicts_with = "replay")]
    pub record: Option<PathBuf>,

    /// Serve every source interaction from this cassette file instead of the network.
    #[arg(long, env = "LECTIONARY_REPLAY", value_name = "CASSETTE")]
    pub replay: Option<PathBuf>,
}
