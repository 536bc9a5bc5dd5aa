//! Text report.

use anyhow::Result;
use chrono::Local;

use cutreview::cli::CutsArgs;
use cutreview::compute_metrics;
use cutreview::report::render_report;

use super::load_cuts;

pub fn handle(args: &CutsArgs) -> Result<()> {
    let loaded = load_cuts(args)?;
    let metrics = compute_metrics(&loaded.cuts, loaded.duration);
    print!("{}", render_report(&loaded.cuts, &metrics, Local::now()));
    Ok(())
}
