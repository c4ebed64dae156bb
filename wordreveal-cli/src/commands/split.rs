//! Split command implementation

use crate::input::FileReader;
use crate::output::{write_chunks, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use wordreveal_core::{split, RevealMode};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input file (default: stdin, also `-`)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Reveal mode that decides the separators
    #[arg(short, long, default_value = "word")]
    pub mode: RevealMode,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        let text = FileReader::read_source(self.input.as_deref())?;
        let chunks = split(&text, self.mode);
        log::info!("Split {} bytes into {} chunks", text.len(), chunks.len());

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let mut formatter = self.format.formatter(BufWriter::new(file));
                write_chunks(formatter.as_mut(), &chunks)
            }
            None => {
                let mut formatter = self.format.formatter(io::stdout().lock());
                write_chunks(formatter.as_mut(), &chunks)
            }
        }
    }
}
