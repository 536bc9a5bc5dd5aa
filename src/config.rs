//! Configuration file handling.
//!
//! The config lives in TOML. Every section and field has a default, so a
//! partial (or missing) file is always usable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::analyzer::DetectionConfig;
use crate::player::PlaybackConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "CUTREVIEW_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to read config '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write config '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub detection: DetectionConfig,
}

impl Config {
    /// Default config file location.
    ///
    /// `$CUTREVIEW_CONFIG` wins over the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("cutreview").join("config.toml"))
    }

    /// The explicit path if given, otherwise [`Config::config_path`].
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        }
    }

    /// Load from the explicit path or the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = Self::resolve_path(explicit)?;
        match Self::load_from(&path)? {
            Some(config) => Ok(config),
            None => {
                if explicit.is_some() {
                    warn!("config file '{}' not found, using defaults", path.display());
                } else {
                    debug!("no config at '{}', using defaults", path.display());
                }
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file. `Ok(None)` when it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the player cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.playback;
        positive("playback.lookahead_secs", p.lookahead_secs)?;
        non_negative("playback.preview_padding_secs", p.preview_padding_secs)?;
        non_negative(
            "playback.preview_highlight_padding_secs",
            p.preview_highlight_padding_secs,
        )?;
        non_negative("playback.end_epsilon_secs", p.end_epsilon_secs)?;
        if p.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "playback.frame_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }

        let min_confidence = self.detection.min_confidence;
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(ConfigError::Invalid {
                field: "detection.min_confidence",
                reason: format!("{} is outside [0, 1]", min_confidence),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{} must be a positive number", value),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{} must not be negative", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.playback.lookahead_secs, 2.0);
        assert_eq!(config.playback.frame_interval_ms, 16);
        assert!(config.detection.fillers);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [playback]
            lookahead_secs = 3.5

            [detection]
            silences = false
            "#,
        )
        .unwrap();
        assert_eq!(config.playback.lookahead_secs, 3.5);
        assert_eq!(config.playback.preview_padding_secs, 1.0);
        assert!(!config.detection.silences);
        assert!(config.detection.cliches);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = Config::default();
        config.playback.lookahead_secs = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "playback.lookahead_secs", .. })
        ));

        let mut config = Config::default();
        config.playback.frame_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.detection.min_confidence = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn explicit_missing_path_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.playback.preview_padding_secs = 0.5;
        config.detection.filler_phrases = vec!["er".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[playback\nlookahead_secs = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn invalid_file_is_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[playback]\nframe_interval_ms = 0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
