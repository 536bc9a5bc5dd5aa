//! Mock cut detection.

use std::path::Path;

use anyhow::{Context, Result};

use cutreview::analyzer::MockAnalyzer;
use cutreview::cli::AnalyzeArgs;
use cutreview::theme::current_theme;
use cutreview::CutFile;

use super::{load_config, resolve_duration};

pub fn handle(args: &AnalyzeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let duration = resolve_duration(Some(args.duration), None)?;

    let analyzer = MockAnalyzer::new(config.detection, args.seed);
    let cuts = analyzer
        .analyze(duration)
        .context("Mock analysis produced invalid cuts")?;
    let file = CutFile::new(Some(duration), &cuts);

    match &args.output {
        Some(path) => {
            file.save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let theme = current_theme();
            eprintln!(
                "{}",
                theme.success_text(&format!(
                    "Detected {} cuts, wrote {}",
                    cuts.len(),
                    path.display()
                ))
            );
        }
        None => print!("{}", file.to_json()?),
    }
    Ok(())
}
