//! WordReveal CLI library
//!
//! This library provides the command-line interface and the terminal study
//! screen for the WordReveal study aid.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;
pub mod study;

pub use error::{CliError, CliResult};
