//! Error types
//!
//! Chunking and the reveal engine cannot fail. Errors only come from
//! validating user settings, parsing names and touching storage.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid settings values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Step size outside the accepted range
    #[error("step size must be between {min} and {max}, got {value}")]
    StepOutOfRange { value: usize, min: usize, max: usize },

    /// Font size outside the accepted range
    #[error("font size must be between {min} and {max}, got {value}")]
    FontSizeOutOfRange { value: u16, min: u16, max: u16 },

    /// A key binding with no key name
    #[error("key binding for '{action}' is empty")]
    EmptyKey { action: &'static str },

    /// Next and previous bound to the same key
    #[error("next and previous are both bound to '{0}'")]
    DuplicateKey(String),
}

/// Unrecognized reveal mode name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reveal mode '{0}' (expected word, sentence or row)")]
pub struct ParseModeError(pub String);

/// Unrecognized theme name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}' (expected light or dark)")]
pub struct ParseThemeError(pub String);

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding state as JSON failed
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
