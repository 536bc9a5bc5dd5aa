//! Summary numbers for a reviewed cut list.
//!
//! Always recomputed from the current statuses; nothing here is cached.

use serde::Serialize;

use crate::cuts::CutInterval;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub original_duration: f64,
    pub final_duration: f64,
    /// Number of accepted cuts
    pub cuts_count: usize,
    /// Sum of accepted cut lengths
    pub time_saved: f64,
}

impl Metrics {
    /// Share of the original duration removed, in percent.
    pub fn percent_saved(&self) -> f64 {
        if self.original_duration > 0.0 {
            self.time_saved / self.original_duration * 100.0
        } else {
            0.0
        }
    }
}

/// Compute metrics over `cuts` for media of `original_duration` seconds.
///
/// Overlapping accepted cuts are summed as-is; the final duration never goes
/// below zero.
pub fn compute_metrics<'a, I>(cuts: I, original_duration: f64) -> Metrics
where
    I: IntoIterator<Item = &'a CutInterval>,
{
    let (cuts_count, time_saved) = cuts
        .into_iter()
        .filter(|c| c.is_accepted())
        .fold((0, 0.0), |(count, saved), c| (count + 1, saved + c.length()));

    Metrics {
        original_duration,
        final_duration: (original_duration - time_saved).max(0.0),
        cuts_count,
        time_saved,
    }
}
