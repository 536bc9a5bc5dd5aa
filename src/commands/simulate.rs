//! Headless playback of the edited result.
//!
//! Drives the playback authority with a manual scheduler and a fixed frame
//! step until the media ends, recording every skip.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use cutreview::cli::SimulateArgs;
use cutreview::media::SimulatedMedia;
use cutreview::player::{ManualScheduler, PlaybackAuthority, PlaybackConfig};
use cutreview::report::format_timestamp;
use cutreview::theme::current_theme;
use cutreview::{compute_metrics, CutSet, Metrics};

use super::{load_config, load_cuts};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JumpRecord {
    pub cut: String,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub jumps: Vec<JumpRecord>,
    pub ticks: usize,
    /// Seconds of playback until the media ended
    pub runtime: f64,
    pub metrics: Metrics,
}

/// Play `cuts` from the start at `step` seconds per frame.
pub fn run_simulation(
    cuts: &CutSet,
    duration: f64,
    config: PlaybackConfig,
    step: f64,
) -> Simulation {
    let mut authority = PlaybackAuthority::new(
        SimulatedMedia::with_duration(duration),
        ManualScheduler::new(),
        config,
    );
    authority.request_play();

    // Every frame either advances by `step` or follows a jump
    let max_ticks = ((duration / step).ceil() as usize + cuts.len()) * 2 + 16;
    let mut jumps = Vec::new();
    let mut ticks = 0;
    let mut runtime = 0.0;

    while ticks < max_ticks && authority.scheduler_mut().take() {
        let report = authority.tick(cuts);
        ticks += 1;
        if let Some(jump) = report.jump {
            info!(cut = %jump.cut, from = jump.from, to = jump.to, "skipped accepted cut");
            jumps.push(JumpRecord {
                cut: jump.cut.to_string(),
                from: jump.from,
                to: jump.to,
            });
        }
        if authority.current_mode().is_advancing() {
            authority.media_mut().advance(step);
            runtime += step;
        }
    }
    authority.shutdown();

    Simulation {
        jumps,
        ticks,
        runtime,
        metrics: compute_metrics(cuts, duration),
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &SimulateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let loaded = load_cuts(&args.input)?;
    let frame_ms = args
        .frame_ms
        .unwrap_or(config.playback.frame_interval_ms)
        .max(1);
    let step = frame_ms as f64 / 1000.0;

    let simulation = run_simulation(&loaded.cuts, loaded.duration, config.playback, step);

    if args.json {
        let json = serde_json::to_string_pretty(&simulation)
            .context("Failed to serialize simulation")?;
        println!("{}", json);
        return Ok(());
    }

    let theme = current_theme();
    for jump in &simulation.jumps {
        println!(
            "{} {} -> {}  {}",
            theme.accent_text("skip"),
            format_timestamp(jump.from),
            format_timestamp(jump.to),
            theme.secondary_text(&jump.cut)
        );
    }
    println!(
        "{}",
        theme.primary_text(&format!(
            "Played {} in {} frames of {}ms (expected {}, {} skips)",
            format_timestamp(simulation.runtime),
            simulation.ticks,
            frame_ms,
            format_timestamp(simulation.metrics.final_duration),
            simulation.jumps.len()
        ))
    );
    Ok(())
}
