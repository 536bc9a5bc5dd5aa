//! Subcommand handlers.
//!
//! Each handler loads what it needs, does its work through the library, and
//! prints to stdout. Errors carry enough context to be shown as-is.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod metrics;
pub mod report;
pub mod review;
pub mod set_status;
pub mod simulate;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use cutreview::cli::CutsArgs;
use cutreview::{Config, CutFile, CutSet};

/// A cut file resolved against a media duration.
pub struct LoadedCuts {
    pub cuts: CutSet,
    pub duration: f64,
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    Config::load(explicit).context("Failed to load configuration")
}

/// Load a cut file and resolve the media duration.
///
/// The `--duration` flag wins over the duration stored in the file.
pub fn load_cuts(args: &CutsArgs) -> Result<LoadedCuts> {
    let file = CutFile::load(&args.cuts)
        .with_context(|| format!("Failed to load cuts from {}", args.cuts.display()))?;
    let duration = resolve_duration(args.duration, file.duration)?;
    let cuts = file
        .into_set()
        .with_context(|| format!("Invalid cuts in {}", args.cuts.display()))?;

    let past_end = cuts.iter().filter(|c| c.end > duration).count();
    if past_end > 0 {
        debug!(past_end, duration, "some cuts extend past the media end");
    }
    Ok(LoadedCuts { cuts, duration })
}

/// Pick the duration from the flag or the file and check it is usable.
pub fn resolve_duration(flag: Option<f64>, from_file: Option<f64>) -> Result<f64> {
    let Some(duration) = flag.or(from_file) else {
        bail!("No media duration: pass --duration or add \"duration\" to the cut file");
    };
    if !(duration.is_finite() && duration > 0.0) {
        bail!("Media duration must be a positive number of seconds, got {}", duration);
    }
    Ok(duration)
}
