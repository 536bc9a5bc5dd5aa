//! Metrics summary.

use std::path::Path;

use anyhow::{Context, Result};

use cutreview::cli::MetricsArgs;
use cutreview::compute_metrics;
use cutreview::report::format_timestamp;
use cutreview::theme::current_theme;

use super::load_cuts;

pub fn handle(args: &MetricsArgs, _config_path: Option<&Path>) -> Result<()> {
    let loaded = load_cuts(&args.input)?;
    let metrics = compute_metrics(&loaded.cuts, loaded.duration);

    if args.json {
        let json =
            serde_json::to_string_pretty(&metrics).context("Failed to serialize metrics")?;
        println!("{}", json);
        return Ok(());
    }

    let theme = current_theme();
    let rows = [
        ("Original duration", format_timestamp(metrics.original_duration)),
        ("Final duration", format_timestamp(metrics.final_duration)),
        ("Accepted cuts", metrics.cuts_count.to_string()),
        (
            "Time saved",
            format!("{:.1}s ({:.1}%)", metrics.time_saved, metrics.percent_saved()),
        ),
    ];
    for (label, value) in rows {
        println!(
            "{} {}",
            theme.secondary_text(&format!("{:<18}", format!("{}:", label))),
            theme.primary_text(&value)
        );
    }
    Ok(())
}
