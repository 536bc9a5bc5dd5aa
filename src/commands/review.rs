//! Interactive review handler.

use std::path::Path;

use anyhow::{Context, Result};

use cutreview::cli::ReviewArgs;
use cutreview::media::SimulatedMedia;
use cutreview::report::format_timestamp;
use cutreview::theme::current_theme;
use cutreview::tui::ReviewApp;
use cutreview::{compute_metrics, CutFile};

use super::{load_config, load_cuts};

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ReviewArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let loaded = load_cuts(&args.input)?;
    let title = args
        .input
        .cuts
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cutreview".to_string());

    let media = SimulatedMedia::with_duration(loaded.duration);
    let app = ReviewApp::new(title, loaded.cuts, media, config.playback)?;
    let outcome = app.run()?;

    let theme = current_theme();
    if outcome.dirty {
        if args.no_save {
            println!("{}", theme.secondary_text("Changes discarded (--no-save)"));
        } else {
            CutFile::new(Some(loaded.duration), &outcome.cuts)
                .save(&args.input.cuts)
                .with_context(|| format!("Failed to save {}", args.input.cuts.display()))?;
            println!(
                "{}",
                theme.success_text(&format!("Saved {}", args.input.cuts.display()))
            );
        }
    }

    let metrics = compute_metrics(&outcome.cuts, loaded.duration);
    println!(
        "{}",
        theme.primary_text(&format!(
            "{} accepted cuts, {} saved, final duration {}",
            metrics.cuts_count,
            format_timestamp(metrics.time_saved),
            format_timestamp(metrics.final_duration)
        ))
    );
    Ok(())
}
