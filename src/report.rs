//! Plain-text review report.

use std::fmt;

use chrono::{DateTime, Local};

use crate::cuts::{CutInterval, CutKind, CutSet};
use crate::metrics::Metrics;

/// Format seconds as `MM:SS.s`.
pub fn format_timestamp(seconds: f64) -> String {
    let tenths = (seconds.max(0.0) * 10.0).round() as u64;
    let mins = tenths / 600;
    let secs = (tenths % 600) / 10;
    format!("{:02}:{:02}.{}", mins, secs, tenths % 10)
}

/// Render the report for `cuts` with precomputed `metrics`.
pub fn render_report(cuts: &CutSet, metrics: &Metrics, generated: DateTime<Local>) -> String {
    Report {
        cuts,
        metrics,
        generated,
    }
    .to_string()
}

struct Report<'a> {
    cuts: &'a CutSet,
    metrics: &'a Metrics,
    generated: DateTime<Local>,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            cuts,
            metrics,
            generated,
        } = self;

        writeln!(f, "Cut Review Report")?;
        writeln!(f, "Generated: {}", generated.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f)?;

        writeln!(f, "Summary")?;
        writeln!(
            f,
            "  Original duration:  {}",
            format_timestamp(metrics.original_duration)
        )?;
        writeln!(
            f,
            "  Final duration:     {}",
            format_timestamp(metrics.final_duration)
        )?;
        writeln!(
            f,
            "  Time saved:         {:.1}s ({:.1}%)",
            metrics.time_saved,
            metrics.percent_saved()
        )?;
        writeln!(
            f,
            "  Accepted cuts:      {} of {}",
            metrics.cuts_count,
            cuts.len()
        )?;

        if cuts.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No cuts detected.");
        }

        writeln!(f)?;
        writeln!(f, "By kind")?;
        for kind in CutKind::ALL {
            let of_kind: Vec<&CutInterval> = cuts.iter().filter(|c| c.kind == kind).collect();
            if of_kind.is_empty() {
                continue;
            }
            let accepted = of_kind.iter().filter(|c| c.is_accepted()).count();
            // fold from +0.0; an empty f64 sum is -0.0
            let saved = of_kind
                .iter()
                .filter(|c| c.is_accepted())
                .fold(0.0, |acc, c| acc + c.length());
            writeln!(
                f,
                "  {:<11} {} accepted, {} rejected, {:.1}s saved",
                kind.label(),
                accepted,
                of_kind.len() - accepted,
                saved
            )?;
        }

        let sorted = cuts.sorted_by_start();
        write_section(
            f,
            "Accepted cuts",
            sorted.iter().copied().filter(|c| c.is_accepted()),
        )?;
        write_section(
            f,
            "Rejected cuts",
            sorted.iter().copied().filter(|c| !c.is_accepted()),
        )
    }
}

fn write_section<'a>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    cuts: impl Iterator<Item = &'a CutInterval>,
) -> fmt::Result {
    let mut cuts = cuts.peekable();
    if cuts.peek().is_none() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    for cut in cuts {
        write!(
            f,
            "  {:<10} {} - {}  {:<11}",
            cut.id.as_str(),
            format_timestamp(cut.start),
            format_timestamp(cut.end),
            cut.kind.label()
        )?;
        if let Some(label) = &cut.label {
            write!(f, " {}", label)?;
        }
        writeln!(f, " ({:.0}%)", cut.confidence * 100.0)?;
    }
    Ok(())
}
