//! Study command implementation

use super::AppContext;
use crate::error::CliError;
use crate::input::FileReader;
use crate::progress::StatusReport;
use crate::study;
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use wordreveal_core::{now_millis, RevealMode, Settings};

/// Arguments for the study command
#[derive(Debug, Args, Default)]
pub struct StudyArgs {
    /// Import this file before studying
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Reveal mode for this run
    #[arg(short, long)]
    pub mode: Option<RevealMode>,

    /// Units per step for this run (1-50)
    #[arg(short = 'n', long, value_name = "N")]
    pub step: Option<usize>,
}

impl StudyArgs {
    /// Stored settings with this run's overrides
    pub fn settings(&self, stored: Settings) -> Result<Settings> {
        let mut settings = stored;
        if let Some(mode) = self.mode {
            settings.reveal_mode = mode;
        }
        if let Some(step) = self.step {
            settings.words_per_step = step;
        }
        settings.validate().context("Invalid settings")?;
        Ok(settings)
    }

    /// Execute the study command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        if !io::stdout().is_terminal() {
            return Err(CliError::NotATerminal.into());
        }

        let settings = self.settings(ctx.settings())?;
        let mut session = ctx.session(&settings);
        if let Some(path) = &self.file {
            session = session.with_text(FileReader::read_text(path)?);
            ctx.save_session(&session)?;
            log::info!("Imported {} for study", path.display());
        }

        let session = study::run(&ctx.store, session, settings, &ctx.config.input)?;
        println!("{}", StatusReport::of(&session, now_millis()).status_line());
        Ok(())
    }
}
