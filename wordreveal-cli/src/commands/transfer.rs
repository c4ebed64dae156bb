//! Import and export of the study text

use super::AppContext;
use crate::input::FileReader;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::Args;
use std::path::PathBuf;
use wordreveal_core::{Store, TextStats};

/// Arguments for the import command
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// UTF-8 text file to study (`-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the export command
#[derive(Debug, Args, Default)]
pub struct ExportArgs {
    /// Output file (default: study-content-YYYY-MM-DD.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Default export file name for `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("study-content-{}.txt", date.format("%Y-%m-%d"))
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let text = FileReader::read_source(Some(&self.file))?;
        let settings = ctx.settings();
        let session = ctx.session(&settings).with_text(text);
        ctx.save_session(&session)?;

        let stats = TextStats::of(session.original_text());
        log::info!("Imported {} into {} chunks", self.file.display(), session.len());
        println!(
            "Imported {}: {} words, {} characters",
            self.file.display(),
            stats.words,
            stats.characters
        );
        Ok(())
    }
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let session = ctx.store.load_session();
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now().date_naive())));

        FileReader::write_text(&path, session.original_text())?;
        println!("Exported to {}", path.display());
        Ok(())
    }
}
