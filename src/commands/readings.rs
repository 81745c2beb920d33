//! The readings command: gather a day's sources, resolve, render.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::context::ServiceContext;
use crate::readings::{Day, LiturgicalInfo};
use crate::render::render;
use crate::resolve::{resolve_day, DayInputs};

/// Produce the markdown document for `date`, or for today when `None`.
///
/// # Errors
///
/// Returns an error string if the date cannot be determined or the primary
/// source's day page cannot be fetched.
pub fn run_with_context(ctx: &ServiceContext, date: Option<NaiveDate>) -> Result<String, String> {
    let date = match date {
        Some(date) => date,
        None => ctx.clock.today().map_err(|e| format!("Could not determine today's date: {e}"))?,
    };
    let day = Day::new(date);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    let inputs = runtime.block_on(gather(ctx, &day))?;

    let readings = resolve_day(&day, &inputs);
    Ok(render(&day, &readings))
}

/// Fetch everything the resolver needs for `day`.
///
/// The secondary source and individual reading pages are optional: their
/// failures are logged and the day is resolved without them.
///
/// # Errors
///
/// Returns an error string if the day index or commemorations cannot be fetched.
pub async fn gather(ctx: &ServiceContext, day: &Day) -> Result<DayInputs, String> {
    let date = day.date();
    info!(%date, "fetching readings");

    let info = match ctx.secondary.liturgical_info(date).await {
        Ok(info) => info,
        Err(e) => {
            warn!(error = %e, "could not fetch orthocal data, continuing without it");
            LiturgicalInfo::default()
        }
    };

    let links = ctx
        .primary
        .day_index(date)
        .await
        .map_err(|e| format!("Error fetching OCA daily page: {e}"))?;
    if links.is_empty() {
        warn!(%date, "no reading links found on OCA for this date");
    }

    let commemorations = ctx
        .primary
        .commemorations(date)
        .await
        .map_err(|e| format!("Error fetching OCA commemorations: {e}"))?;

    let mut readings = Vec::with_capacity(links.len());
    for link in &links {
        info!(index = link.sequence_index, label = %link.label, "fetching reading");
        match ctx.primary.reading_page(link).await {
            Ok(reading) => readings.push(reading),
            Err(e) => warn!(index = link.sequence_index, error = %e, "skipping reading"),
        }
    }

    Ok(DayInputs { readings, commemorations, info })
}
