//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordreveal_core::Chunk;

/// Markdown formatter - outputs non-blank chunks as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk, _offset: usize) -> Result<()> {
        if chunk.is_blank() {
            return Ok(());
        }
        self.chunk_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` {}",
            self.chunk_count,
            chunk.id,
            chunk.text.trim()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
