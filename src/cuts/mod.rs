//! Detected cut intervals and their review status.
//!
//! A [`CutSet`] is the interval source the player reads every tick. It keeps
//! insertion order; callers that need chronological order ask for
//! [`CutSet::sorted_by_start`] explicitly.

mod error;
mod file;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::CutError;
pub use file::CutFile;

/// Opaque identifier of a cut, unique within a review session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutId(String);

impl CutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CutId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CutId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Category of a detected cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutKind {
    Cliche,
    Filler,
    Silence,
    Repetition,
    Stutter,
}

impl CutKind {
    /// All kinds in display order
    pub const ALL: [CutKind; 5] = [
        CutKind::Cliche,
        CutKind::Filler,
        CutKind::Silence,
        CutKind::Repetition,
        CutKind::Stutter,
    ];

    /// Display label for lists and reports.
    pub fn label(&self) -> &'static str {
        match self {
            CutKind::Cliche => "cliché",
            CutKind::Filler => "filler",
            CutKind::Silence => "silence",
            CutKind::Repetition => "repetition",
            CutKind::Stutter => "stutter",
        }
    }
}

/// Review decision for a cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutStatus {
    /// The cut will be removed from the edited result (skipped on playback)
    #[default]
    Accepted,
    /// The cut stays in the edited result
    Rejected,
}

impl CutStatus {
    pub fn toggled(self) -> Self {
        match self {
            CutStatus::Accepted => CutStatus::Rejected,
            CutStatus::Rejected => CutStatus::Accepted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CutStatus::Accepted => "accepted",
            CutStatus::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for CutStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accepted" | "accept" => Ok(CutStatus::Accepted),
            "rejected" | "reject" => Ok(CutStatus::Rejected),
            other => Err(format!(
                "unknown status '{}', expected 'accepted' or 'rejected'",
                other
            )),
        }
    }
}

/// A half-open time range `[start, end)` flagged for removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutInterval {
    pub id: CutId,
    pub kind: CutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds (exclusive)
    pub end: f64,
    pub confidence: f64,
    #[serde(default)]
    pub status: CutStatus,
}

impl CutInterval {
    /// Create a validated, accepted cut.
    pub fn new(
        id: impl Into<CutId>,
        kind: CutKind,
        start: f64,
        end: f64,
        confidence: f64,
    ) -> Result<Self, CutError> {
        let cut = Self {
            id: id.into(),
            kind,
            label: None,
            start,
            end,
            confidence,
            status: CutStatus::Accepted,
        };
        cut.validate()?;
        Ok(cut)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_status(mut self, status: CutStatus) -> Self {
        self.status = status;
        self
    }

    /// Check the interval invariants: `0 <= start < end`, confidence in `[0, 1]`.
    pub fn validate(&self) -> Result<(), CutError> {
        let bounds_ok = self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.start < self.end;
        if !bounds_ok {
            return Err(CutError::InvalidBounds {
                id: self.id.to_string(),
                start: self.start,
                end: self.end,
            });
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(CutError::InvalidConfidence {
                id: self.id.to_string(),
                confidence: self.confidence,
            });
        }
        Ok(())
    }

    /// Half-open containment: `start <= time < end`.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }

    /// Length of the cut in seconds.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.status == CutStatus::Accepted
    }
}

/// Ordered collection of cuts with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutSet {
    cuts: Vec<CutInterval>,
}

impl CutSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from intervals, validating each and rejecting duplicate ids.
    pub fn from_intervals(cuts: Vec<CutInterval>) -> Result<Self, CutError> {
        let mut set = Self::new();
        for cut in cuts {
            set.push(cut)?;
        }
        Ok(set)
    }

    /// Append a cut, keeping insertion order.
    pub fn push(&mut self, cut: CutInterval) -> Result<(), CutError> {
        cut.validate()?;
        if self.get(&cut.id).is_some() {
            return Err(CutError::DuplicateId {
                id: cut.id.to_string(),
            });
        }
        self.cuts.push(cut);
        Ok(())
    }

    pub fn get(&self, id: &CutId) -> Option<&CutInterval> {
        self.cuts.iter().find(|c| &c.id == id)
    }

    /// Position of a cut in insertion order.
    pub fn index_of(&self, id: &CutId) -> Option<usize> {
        self.cuts.iter().position(|c| &c.id == id)
    }

    /// Set the review status of a cut.
    pub fn set_status(&mut self, id: &CutId, status: CutStatus) -> Result<(), CutError> {
        let cut = self
            .cuts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| CutError::UnknownCut { id: id.to_string() })?;
        cut.status = status;
        Ok(())
    }

    /// Flip accepted/rejected, returning the new status.
    pub fn toggle(&mut self, id: &CutId) -> Result<CutStatus, CutError> {
        let status = self
            .get(id)
            .map(|c| c.status.toggled())
            .ok_or_else(|| CutError::UnknownCut { id: id.to_string() })?;
        self.set_status(id, status)?;
        Ok(status)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CutInterval> {
        self.cuts.iter()
    }

    pub fn as_slice(&self) -> &[CutInterval] {
        &self.cuts
    }

    pub fn accepted(&self) -> impl Iterator<Item = &CutInterval> {
        self.cuts.iter().filter(|c| c.is_accepted())
    }

    /// Cuts ordered by start time; ties keep insertion order.
    pub fn sorted_by_start(&self) -> Vec<&CutInterval> {
        let mut sorted: Vec<&CutInterval> = self.cuts.iter().collect();
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
        sorted
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}

impl<'a> IntoIterator for &'a CutSet {
    type Item = &'a CutInterval;
    type IntoIter = std::slice::Iter<'a, CutInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.cuts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cut(id: &str, start: f64, end: f64) -> CutInterval {
        CutInterval::new(id, CutKind::Filler, start, end, 0.8).unwrap()
    }

    #[test]
    fn contains_is_half_open() {
        let c = cut("a", 2.0, 4.0);
        assert!(c.contains(2.0));
        assert!(c.contains(4.0 - 1e-9));
        assert!(!c.contains(4.0));
        assert!(!c.contains(1.999));
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        let err = CutInterval::new("x", CutKind::Silence, 5.0, 5.0, 0.5).unwrap_err();
        assert!(matches!(err, CutError::InvalidBounds { .. }));
    }

    #[test]
    fn new_rejects_negative_start() {
        assert!(CutInterval::new("x", CutKind::Silence, -0.1, 1.0, 0.5).is_err());
    }

    #[test]
    fn new_rejects_nan_bounds() {
        assert!(CutInterval::new("x", CutKind::Silence, f64::NAN, 1.0, 0.5).is_err());
    }

    #[test]
    fn new_rejects_confidence_out_of_range() {
        let err = CutInterval::new("x", CutKind::Stutter, 0.0, 1.0, 1.2).unwrap_err();
        assert!(matches!(err, CutError::InvalidConfidence { .. }));
    }

    #[test]
    fn push_rejects_duplicate_id() {
        let mut set = CutSet::new();
        set.push(cut("a", 0.0, 1.0)).unwrap();
        let err = set.push(cut("a", 2.0, 3.0)).unwrap_err();
        assert!(matches!(err, CutError::DuplicateId { .. }));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_status_updates_cut() {
        let mut set = CutSet::from_intervals(vec![cut("a", 0.0, 1.0)]).unwrap();
        set.set_status(&CutId::new("a"), CutStatus::Rejected).unwrap();
        assert_eq!(set.get(&"a".into()).unwrap().status, CutStatus::Rejected);
    }

    #[test]
    fn set_status_unknown_id_errors() {
        let mut set = CutSet::new();
        let err = set
            .set_status(&CutId::new("missing"), CutStatus::Accepted)
            .unwrap_err();
        assert!(matches!(err, CutError::UnknownCut { .. }));
    }

    #[test]
    fn toggle_flips_status() {
        let mut set = CutSet::from_intervals(vec![cut("a", 0.0, 1.0)]).unwrap();
        assert_eq!(set.toggle(&"a".into()).unwrap(), CutStatus::Rejected);
        assert_eq!(set.toggle(&"a".into()).unwrap(), CutStatus::Accepted);
    }

    #[test]
    fn insertion_order_is_kept() {
        let set = CutSet::from_intervals(vec![cut("late", 10.0, 11.0), cut("early", 1.0, 2.0)])
            .unwrap();
        let ids: Vec<&str> = set.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);

        let sorted: Vec<&str> = set.sorted_by_start().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(sorted, vec!["early", "late"]);
    }

    #[test]
    fn status_parses_from_str() {
        assert_eq!("accepted".parse::<CutStatus>(), Ok(CutStatus::Accepted));
        assert_eq!("Reject".parse::<CutStatus>(), Ok(CutStatus::Rejected));
        assert!("maybe".parse::<CutStatus>().is_err());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&CutKind::Repetition).unwrap();
        assert_eq!(json, "\"repetition\"");
    }
}
