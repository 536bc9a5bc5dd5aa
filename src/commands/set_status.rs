//! Change the status of one cut in a cut file.

use anyhow::{Context, Result};

use cutreview::cli::SetStatusArgs;
use cutreview::theme::current_theme;
use cutreview::{CutFile, CutId};

pub fn handle(args: &SetStatusArgs) -> Result<()> {
    let file = CutFile::load(&args.cuts)
        .with_context(|| format!("Failed to load cuts from {}", args.cuts.display()))?;
    let duration = file.duration;
    let mut cuts = file
        .into_set()
        .with_context(|| format!("Invalid cuts in {}", args.cuts.display()))?;

    let id = CutId::new(args.id.as_str());
    cuts.set_status(&id, args.status)?;
    CutFile::new(duration, &cuts)
        .save(&args.cuts)
        .with_context(|| format!("Failed to save {}", args.cuts.display()))?;

    let theme = current_theme();
    println!(
        "{} {}",
        theme.primary_text(&format!("{}:", id)),
        theme.success_text(args.status.label())
    );
    Ok(())
}
