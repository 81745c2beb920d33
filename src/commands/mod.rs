//! Command dispatch and handlers.

pub mod readings;

use crate::cli::Cli;
use crate::config::SourceConfig;
use crate::context::ServiceContext;

/// Dispatch parsed arguments to the readings command and print the document.
///
/// `--replay` serves every port from a cassette; `--record` captures every
/// port interaction into one. The cassette is written even when the
/// command fails.
///
/// # Errors
///
/// Returns an error string if the context cannot be built, the command
/// fails, or the recording cannot be written.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = if let Some(path) = &cli.replay {
        ServiceContext::replaying(path)?
    } else if let Some(path) = &cli.record {
        ServiceContext::recording(&SourceConfig::from_env(), path)?
    } else {
        ServiceContext::live(&SourceConfig::from_env())?
    };

    let result = readings::run_with_context(&ctx, cli.date);

    if let Some(path) = ctx.finish()? {
        eprintln!("Recording saved to: {}", path.display());
    }

    let document = result?;
    print!("{document}");
    Ok(())
}
