//! Chunk and reveal mode types
//!
//! A chunk is the smallest addressable piece of study text. Every chunk is
//! classified once, when it is created, so the reveal engine can switch on a
//! [`ChunkKind`] instead of re-inspecting the text on every step.

use crate::error::ParseModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of chunking and of one counted step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// One step reveals one word
    #[default]
    Word,
    /// One step reveals one sentence with its trailing punctuation and space
    Sentence,
    /// One step reveals one line
    Row,
}

impl RevealMode {
    /// All modes, in menu order
    pub const ALL: [RevealMode; 3] = [RevealMode::Word, RevealMode::Sentence, RevealMode::Row];

    /// Lowercase name used in ids, files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealMode::Word => "word",
            RevealMode::Sentence => "sentence",
            RevealMode::Row => "row",
        }
    }

    /// Plural name of one unit, for "<unit> per step" labels
    pub fn unit_label(&self) -> &'static str {
        match self {
            RevealMode::Word => "Words",
            RevealMode::Sentence => "Sentences",
            RevealMode::Row => "Rows",
        }
    }
}

impl fmt::Display for RevealMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevealMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Ok(RevealMode::Word),
            "sentence" => Ok(RevealMode::Sentence),
            "row" | "line" => Ok(RevealMode::Row),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Classification of a chunk, computed from its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// Words or other visible text
    Content,
    /// A short run of spaces or tabs
    Whitespace,
    /// Text starting with sentence-ending punctuation (`.`, `!`, `?`)
    Terminator,
    /// Whitespace containing at least one line break
    Newline,
    /// Ten or more whitespace characters without a line break
    LargeGap,
}

/// Minimum length of a whitespace run that separates sentences on its own
pub const LARGE_GAP_LEN: usize = 10;

impl ChunkKind {
    /// Classify a piece of text
    pub fn classify(text: &str) -> Self {
        if !text.is_empty() && text.chars().all(char::is_whitespace) {
            if text.contains('\n') {
                ChunkKind::Newline
            } else if text.chars().count() >= LARGE_GAP_LEN {
                ChunkKind::LargeGap
            } else {
                ChunkKind::Whitespace
            }
        } else if text.starts_with(['.', '!', '?']) {
            ChunkKind::Terminator
        } else {
            ChunkKind::Content
        }
    }

    /// Whitespace of any kind
    pub fn is_blank(&self) -> bool {
        matches!(
            self,
            ChunkKind::Whitespace | ChunkKind::Newline | ChunkKind::LargeGap
        )
    }

    /// Anything that attaches to a neighbouring sentence instead of being one
    pub fn is_boundary(&self) -> bool {
        !matches!(self, ChunkKind::Content)
    }

    /// Whitespace that stays on the current line
    pub fn is_inline_space(&self) -> bool {
        matches!(self, ChunkKind::Whitespace | ChunkKind::LargeGap)
    }
}

/// One addressable piece of the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredChunk")]
pub struct Chunk {
    /// Identifier, unique within one chunk sequence
    pub id: String,
    /// Non-empty source text of the chunk
    pub text: String,
    /// Position in the sequence when it was created
    pub original_index: usize,
    #[serde(skip_serializing)]
    pub(crate) kind: ChunkKind,
    #[serde(rename = "isRevealed")]
    pub(crate) revealed: bool,
    #[serde(rename = "isHighlighted")]
    pub(crate) highlighted: bool,
}

impl Chunk {
    /// Create a hidden, unhighlighted chunk at `index` of a `mode` sequence
    pub fn new(mode: RevealMode, index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: format!("chunk-{mode}-{index}"),
            kind: ChunkKind::classify(&text),
            text,
            original_index: index,
            revealed: false,
            highlighted: false,
        }
    }

    /// Classification of the text
    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// Whether the reveal cursor has passed this chunk
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the user pinned this chunk visible
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Revealed or highlighted
    pub fn is_visible(&self) -> bool {
        self.revealed || self.highlighted
    }

    /// Shorthand for `kind().is_blank()`
    pub fn is_blank(&self) -> bool {
        self.kind.is_blank()
    }
}

/// On-disk shape of a chunk; the kind is recomputed on load
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredChunk {
    id: String,
    text: String,
    #[serde(default)]
    is_revealed: bool,
    #[serde(default)]
    is_highlighted: bool,
    #[serde(default)]
    original_index: usize,
}

impl From<StoredChunk> for Chunk {
    fn from(stored: StoredChunk) -> Self {
        Self {
            kind: ChunkKind::classify(&stored.text),
            id: stored.id,
            text: stored.text,
            original_index: stored.original_index,
            revealed: stored.is_revealed,
            highlighted: stored.is_highlighted,
        }
    }
}
