//! Configuration for cut detection.

use serde::{Deserialize, Serialize};

use crate::cuts::CutKind;

/// Which kinds of cuts the detector reports, and how picky it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Detect overused stock phrases
    pub cliches: bool,
    /// Detect filler words ("um", "uh", ...)
    pub fillers: bool,
    /// Detect long pauses
    pub silences: bool,
    /// Detect repeated phrases
    pub repetitions: bool,
    /// Detect stuttered starts
    pub stutters: bool,
    /// Filler words used to label filler cuts
    pub filler_phrases: Vec<String>,
    /// Stock phrases used to label cliche cuts
    pub cliche_phrases: Vec<String>,
    /// Candidates below this confidence are dropped
    pub min_confidence: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            cliches: true,
            fillers: true,
            silences: true,
            repetitions: true,
            stutters: true,
            filler_phrases: ["um", "uh", "like", "you know", "basically", "sort of"]
                .map(String::from)
                .to_vec(),
            cliche_phrases: [
                "at the end of the day",
                "think outside the box",
                "it is what it is",
                "game changer",
                "low-hanging fruit",
            ]
            .map(String::from)
            .to_vec(),
            min_confidence: 0.5,
        }
    }
}

impl DetectionConfig {
    pub fn is_enabled(&self, kind: CutKind) -> bool {
        match kind {
            CutKind::Cliche => self.cliches,
            CutKind::Filler => self.fillers,
            CutKind::Silence => self.silences,
            CutKind::Repetition => self.repetitions,
            CutKind::Stutter => self.stutters,
        }
    }

    pub fn set_enabled(&mut self, kind: CutKind, enabled: bool) {
        let flag = match kind {
            CutKind::Cliche => &mut self.cliches,
            CutKind::Filler => &mut self.fillers,
            CutKind::Silence => &mut self.silences,
            CutKind::Repetition => &mut self.repetitions,
            CutKind::Stutter => &mut self.stutters,
        };
        *flag = enabled;
    }

    /// Enabled kinds in declaration order.
    pub fn enabled_kinds(&self) -> Vec<CutKind> {
        CutKind::ALL
            .into_iter()
            .filter(|&kind| self.is_enabled(kind))
            .collect()
    }
}
