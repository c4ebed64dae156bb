//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordreveal_core::Chunk;

/// Plain text formatter - outputs one non-blank chunk per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk, _offset: usize) -> Result<()> {
        if !chunk.is_blank() {
            writeln!(self.writer, "{}", chunk.text.trim())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
