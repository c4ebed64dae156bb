//! Logger setup

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Log file written while the study screen owns the terminal
pub const LOG_FILE: &str = "wordreveal.log";

/// Default filter for a `-v` count
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` overrides the level. With `log_dir`, records are appended to
/// [`LOG_FILE`] in that directory instead of stderr.
pub fn init_logging(verbose: u8, quiet: bool, log_dir: Option<&Path>) -> Result<()> {
    if quiet {
        return Ok(());
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level_for(verbose)));

    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        let path = dir.join(LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}
