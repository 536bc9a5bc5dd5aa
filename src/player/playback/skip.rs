//! Skip policy: decides when the play-head must jump past an accepted cut.
//!
//! All functions here are pure. The authority calls [`evaluate`] once per
//! tick while playing and re-evaluates on the next tick, so a jump that lands
//! inside another accepted cut is caught one frame later.

use crate::cuts::{CutId, CutInterval};

/// Outcome of evaluating the skip policy at one position.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipDecision {
    /// Position is not inside any accepted cut
    Continue,
    /// Position is inside an accepted cut; move the play-head to `target`
    Jump { cut: CutId, target: f64 },
}

impl SkipDecision {
    pub fn is_jump(&self) -> bool {
        matches!(self, SkipDecision::Jump { .. })
    }
}

/// Evaluate the skip policy at `position`.
///
/// Only accepted cuts participate. When several accepted cuts contain the
/// position, the one with the latest end wins so a single jump clears all of
/// them; equal ends resolve to the earliest in insertion order.
pub fn evaluate<'a, I>(position: f64, cuts: I) -> SkipDecision
where
    I: IntoIterator<Item = &'a CutInterval>,
{
    let mut best: Option<&CutInterval> = None;
    for cut in cuts {
        if !cut.is_accepted() || !cut.contains(position) {
            continue;
        }
        match best {
            Some(b) if b.end >= cut.end => {}
            _ => best = Some(cut),
        }
    }

    match best {
        Some(cut) => SkipDecision::Jump {
            cut: cut.id.clone(),
            target: cut.end,
        },
        None => SkipDecision::Continue,
    }
}

/// Apply the skip policy repeatedly until the position is clear.
///
/// Returns the settled position and the number of jumps taken. Each jump
/// strictly increases the position to the end of a distinct accepted cut,
/// so this takes at most one jump per accepted cut.
pub fn settle(mut position: f64, cuts: &[CutInterval]) -> (f64, usize) {
    let mut jumps = 0;
    while let SkipDecision::Jump { target, .. } = evaluate(position, cuts) {
        position = target;
        jumps += 1;
    }
    (position, jumps)
}

/// Cut to highlight during normal playback when no jump happens.
///
/// A cut containing the position (necessarily rejected, since accepted ones
/// would have been skipped) takes priority. Otherwise the earliest-starting
/// cut whose start lies within `lookahead` seconds ahead is returned.
/// Rejected cuts are eligible for both.
pub fn upcoming(position: f64, cuts: &[CutInterval], lookahead: f64) -> Option<&CutInterval> {
    if let Some(current) = cuts.iter().find(|c| c.contains(position)) {
        return Some(current);
    }
    cuts.iter()
        .filter(|c| c.start >= position && c.start - position <= lookahead)
        .min_by(|a, b| a.start.total_cmp(&b.start))
}

/// Playback window for previewing `cut`: `[start - padding, end + padding]`
/// clamped to `[0, duration]`. Returns `(start, bound)`.
pub fn preview_window(cut: &CutInterval, duration: f64, padding: f64) -> (f64, f64) {
    let start = (cut.start - padding).max(0.0);
    let bound = (cut.end + padding).min(duration);
    (start.min(bound), bound)
}

/// Whether `position` is close enough to `cut` to highlight it during a preview.
#[inline]
pub fn near(position: f64, cut: &CutInterval, padding: f64) -> bool {
    position >= cut.start - padding && position <= cut.end + padding
}
