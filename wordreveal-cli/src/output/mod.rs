//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;
use unicode_width::UnicodeWidthChar;
use wordreveal_core::{Chunk, ChunkKind, Session};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single chunk starting at byte `offset` of the text
    fn format_chunk(&mut self, chunk: &Chunk, offset: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one chunk per line
    Text,
    /// JSON array of chunks with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// Formatter for this format writing to `writer`
    pub fn formatter<'a, W: Write + 'a>(self, writer: W) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Feed a whole chunk sequence through a formatter
pub fn write_chunks(formatter: &mut dyn OutputFormatter, chunks: &[Chunk]) -> Result<()> {
    let mut offset = 0;
    for chunk in chunks {
        formatter.format_chunk(chunk, offset)?;
        offset += chunk.text.len();
    }
    formatter.finish()
}

/// Placeholder character for hidden text
pub const MASK: char = '_';

/// `text` with every non-whitespace character replaced by [`MASK`]
///
/// A wide character gets one mask per terminal column, so revealing a chunk
/// never changes its width.
pub fn mask(text: &str) -> String {
    let mut masked = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() {
            masked.push(c);
        } else {
            let columns = UnicodeWidthChar::width(c).unwrap_or(0);
            masked.extend(std::iter::repeat(MASK).take(columns));
        }
    }
    masked
}

/// Text of a session as it would appear on screen
///
/// Hidden chunks are masked. With `mark_hidden`, hidden chunks are shown in
/// `[brackets]` instead.
pub fn render_session(session: &Session, mark_hidden: bool) -> String {
    let mut out = String::with_capacity(session.original_text().len());
    for chunk in session.chunks() {
        if chunk.is_visible() || chunk.is_blank() {
            out.push_str(&chunk.text);
        } else if mark_hidden {
            out.push('[');
            out.push_str(&chunk.text);
            out.push(']');
        } else {
            out.push_str(&mask(&chunk.text));
        }
    }
    out
}

/// Short lowercase name of a chunk kind
pub fn kind_name(kind: ChunkKind) -> &'static str {
    match kind {
        ChunkKind::Content => "content",
        ChunkKind::Whitespace => "whitespace",
        ChunkKind::Terminator => "terminator",
        ChunkKind::Newline => "newline",
        ChunkKind::LargeGap => "gap",
    }
}
