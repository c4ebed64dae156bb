//! JSON output formatter

use super::{kind_name, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordreveal_core::Chunk;

/// JSON formatter - outputs chunks as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Chunk id
    pub id: String,
    /// The chunk text, whitespace included
    pub text: String,
    /// Classification of the text
    pub kind: String,
    /// Starting byte offset in the original text
    pub offset: usize,
    /// Length of the chunk in bytes
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk, offset: usize) -> Result<()> {
        self.chunks.push(ChunkData {
            id: chunk.id.clone(),
            text: chunk.text.clone(),
            kind: kind_name(chunk.kind()).to_string(),
            offset,
            length: chunk.text.len(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
