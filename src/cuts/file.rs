//! JSON cut file: the on-disk form of a review session's cut list.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CutError, CutInterval, CutSet};

/// Serialized cut list, optionally carrying the media duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CutFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub cuts: Vec<CutInterval>,
}

impl CutFile {
    pub fn new(duration: Option<f64>, cuts: &CutSet) -> Self {
        Self {
            duration,
            cuts: cuts.iter().cloned().collect(),
        }
    }

    /// Parse a cut file from JSON text.
    pub fn parse(json: &str) -> Result<Self, CutError> {
        let file: CutFile = serde_json::from_str(json)?;
        if let Some(d) = file.duration {
            if !(d.is_finite() && d > 0.0) {
                return Err(CutError::InvalidDuration(d));
            }
        }
        Ok(file)
    }

    /// Load and parse a cut file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CutError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CutError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Write the cut file as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CutError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| CutError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, CutError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Validate the cuts and turn them into a [`CutSet`].
    pub fn into_set(self) -> Result<CutSet, CutError> {
        CutSet::from_intervals(self.cuts)
    }
}
