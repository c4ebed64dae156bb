//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No chunk with this id in the stored session
    UnknownChunk(String),
    /// Key name that cannot be bound
    InvalidKey(String),
    /// Configuration error
    ConfigError(String),
    /// The study screen needs an interactive terminal
    NotATerminal,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnknownChunk(id) => write!(f, "No chunk with id: {id}"),
            CliError::InvalidKey(name) => write!(f, "Invalid key name: {name}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NotATerminal => write!(f, "The study screen needs an interactive terminal"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
