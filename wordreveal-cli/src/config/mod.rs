//! Configuration module
//!
//! The CLI reads an optional TOML file. Every section and key may be left
//! out; missing values take their defaults.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordreveal_core::{HoldRepeat, DEFAULT_HOLD_DELAY, DEFAULT_REPEAT_INTERVAL};

/// File name looked up in the platform config directory
pub const CONFIG_FILE: &str = "config.toml";

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Pointer and key input configuration
    #[serde(default)]
    pub input: InputConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding settings and session (default: platform data dir)
    pub data_dir: Option<PathBuf>,
}

/// Input-related configuration for the study screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// How long a button must be held before it repeats
    pub hold_delay_ms: u64,

    /// Time between repeated steps while held
    pub repeat_interval_ms: u64,

    /// Horizontal drag distance that counts as a swipe
    pub swipe_min_columns: u16,

    /// Vertical drift allowed during a swipe
    pub swipe_max_rows: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            hold_delay_ms: DEFAULT_HOLD_DELAY.as_millis() as u64,
            repeat_interval_ms: DEFAULT_REPEAT_INTERVAL.as_millis() as u64,
            swipe_min_columns: 8,
            swipe_max_rows: 2,
        }
    }
}

impl InputConfig {
    /// A hold-to-repeat state machine with these timings
    pub fn hold_repeat(&self) -> HoldRepeat {
        HoldRepeat::new(
            Duration::from_millis(self.hold_delay_ms),
            Duration::from_millis(self.repeat_interval_ms),
        )
    }
}

impl CliConfig {
    /// Parse a configuration document
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load the configuration
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when a file is there, and the defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    log::debug!("No configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Data directory: the command line beats the config file, which beats
    /// the platform default
    pub fn data_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.storage.data_dir.clone())
            .unwrap_or_else(wordreveal_core::default_data_dir)
    }
}

/// `<platform config dir>/wordreveal/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordreveal").join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.storage.data_dir, None);
        assert_eq!(config.input.hold_delay_ms, 300);
        assert_eq!(config.input.repeat_interval_ms, 150);
        assert_eq!(config.input.swipe_min_columns, 8);
        assert_eq!(config.input.swipe_max_rows, 2);
    }

    #[test]
    fn test_partial_document() {
        let config = CliConfig::from_toml("[input]\nhold_delay_ms = 500\n").unwrap();
        assert_eq!(config.input.hold_delay_ms, 500);
        assert_eq!(config.input.repeat_interval_ms, 150);
        assert_eq!(config.storage, StorageConfig::default());

        let empty = CliConfig::from_toml("").unwrap();
        assert_eq!(empty, CliConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let error = CliConfig::from_toml("[input]\nhold_delay = 5\n").unwrap_err();
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_data_dir_precedence() {
        let config = CliConfig {
            storage: StorageConfig {
                data_dir: Some(PathBuf::from("/from/config")),
            },
            ..CliConfig::default()
        };
        assert_eq!(
            config.data_dir(Some(Path::new("/from/cli"))),
            PathBuf::from("/from/cli")
        );
        assert_eq!(config.data_dir(None), PathBuf::from("/from/config"));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[storage]\ndata_dir = \"/tmp/wr\"\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/wr")));

        let missing = CliConfig::load(Some(&temp_dir.path().join("missing.toml")));
        assert!(missing.is_err());
    }

    #[test]
    fn test_hold_repeat_uses_timings() {
        let input = InputConfig {
            hold_delay_ms: 100,
            ..InputConfig::default()
        };
        let repeat = input.hold_repeat();
        assert!(repeat.is_idle());
    }
}
