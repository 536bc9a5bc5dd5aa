//! Deterministic stand-in for a speech analysis service.
//!
//! Invents plausible cuts along a timeline of a given duration. The same seed
//! and config always produce the same cuts.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::DetectionConfig;
use crate::cuts::{CutError, CutInterval, CutKind, CutSet};

/// Gap between consecutive detections, in seconds.
const GAP_RANGE: std::ops::Range<f64> = 3.0..12.0;

pub struct MockAnalyzer {
    config: DetectionConfig,
    seed: u64,
}

impl MockAnalyzer {
    pub fn new(config: DetectionConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Detect cuts in media of `duration` seconds.
    pub fn analyze(&self, duration: f64) -> Result<CutSet, CutError> {
        if !(duration > 0.0) || !duration.is_finite() {
            return Err(CutError::InvalidDuration(duration));
        }

        let kinds = self.config.enabled_kinds();
        let mut set = CutSet::new();
        if kinds.is_empty() {
            return Ok(set);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut cursor = rng.gen_range(0.5..4.0);
        let mut candidates = 0usize;

        while cursor < duration {
            candidates += 1;
            let kind = kinds[rng.gen_range(0..kinds.len())];
            let start = round2(cursor);
            let end = round2(cursor + rng.gen_range(length_range(kind))).min(duration);
            let confidence = round2(rng.gen_range(0.4..1.0));

            if end > start && confidence >= self.config.min_confidence {
                let id = format!("cut-{:03}", set.len() + 1);
                let mut cut = CutInterval::new(id, kind, start, end, confidence)?;
                cut.label = self.label_for(kind, end - start, &mut rng);
                set.push(cut)?;
            }

            cursor = end + rng.gen_range(GAP_RANGE);
        }

        debug!(
            duration,
            candidates,
            detected = set.len(),
            "mock analysis finished"
        );
        Ok(set)
    }

    fn label_for(&self, kind: CutKind, length: f64, rng: &mut StdRng) -> Option<String> {
        match kind {
            CutKind::Filler => self.config.filler_phrases.choose(rng).map(|p| format!("\"{}\"", p)),
            CutKind::Cliche => self.config.cliche_phrases.choose(rng).map(|p| format!("\"{}\"", p)),
            CutKind::Silence => Some(format!("{:.1}s pause", length)),
            CutKind::Repetition => Some("repeated phrase".to_string()),
            CutKind::Stutter => Some("false start".to_string()),
        }
    }
}

fn length_range(kind: CutKind) -> std::ops::Range<f64> {
    match kind {
        CutKind::Cliche => 1.0..2.5,
        CutKind::Filler => 0.3..0.9,
        CutKind::Silence => 0.8..3.0,
        CutKind::Repetition => 1.0..3.0,
        CutKind::Stutter => 0.2..0.6,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
