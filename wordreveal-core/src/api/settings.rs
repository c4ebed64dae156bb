//! User settings

use crate::domain::RevealMode;
use crate::error::{ParseThemeError, SettingsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Accepted units per step
pub const STEP_RANGE: RangeInclusive<usize> = 1..=50;

/// Accepted font sizes in pixels
pub const FONT_SIZE_RANGE: RangeInclusive<u16> = 12..=32;

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Preferences persisted separately from the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Granularity of chunking and stepping
    pub reveal_mode: RevealMode,
    /// Units revealed or hidden per step
    pub words_per_step: usize,
    /// Text size of the study view
    pub font_size: u16,
    pub theme: Theme,
    /// Key name for "reveal next", e.g. `ArrowRight`
    pub key_next: String,
    /// Key name for "hide previous", e.g. `ArrowLeft`
    pub key_prev: String,
    /// Save the session after every change
    pub auto_save: bool,
    /// Clicking a chunk toggles its highlight
    pub highlight_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal_mode: RevealMode::Word,
            words_per_step: 1,
            font_size: 18,
            theme: Theme::Light,
            key_next: "ArrowRight".to_string(),
            key_prev: "ArrowLeft".to_string(),
            auto_save: true,
            highlight_mode: false,
        }
    }
}

impl Settings {
    /// Check every field against its accepted values
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !STEP_RANGE.contains(&self.words_per_step) {
            return Err(SettingsError::StepOutOfRange {
                value: self.words_per_step,
                min: *STEP_RANGE.start(),
                max: *STEP_RANGE.end(),
            });
        }
        if !FONT_SIZE_RANGE.contains(&self.font_size) {
            return Err(SettingsError::FontSizeOutOfRange {
                value: self.font_size,
                min: *FONT_SIZE_RANGE.start(),
                max: *FONT_SIZE_RANGE.end(),
            });
        }
        if self.key_next.is_empty() {
            return Err(SettingsError::EmptyKey { action: "next" });
        }
        if self.key_prev.is_empty() {
            return Err(SettingsError::EmptyKey { action: "previous" });
        }
        if self.key_next == self.key_prev {
            return Err(SettingsError::DuplicateKey(self.key_next.clone()));
        }
        Ok(())
    }

    /// "Words per step", "Sentences per step" or "Rows per step"
    pub fn step_label(&self) -> String {
        format!("{} per step", self.reveal_mode.unit_label())
    }
}
