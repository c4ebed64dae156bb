//! Text chunking
//!
//! Splits study text into an ordered sequence of chunks along the separators
//! of a [`RevealMode`]. Separators are kept as chunks of their own, so the
//! concatenation of all chunk texts is always the original text.

use super::chunk::{Chunk, RevealMode};
use regex::Regex;
use std::sync::OnceLock;

/// Runs of whitespace
const WORD_SEPARATOR: &str = r"\s+";

/// Sentence punctuation with its trailing whitespace, a large gap, or line breaks
const SENTENCE_SEPARATOR: &str = r"[.!?]+\s*|\s{10,}|\n+";

/// Each line break on its own
const ROW_SEPARATOR: &str = r"\n";

static WORD_RE: OnceLock<Regex> = OnceLock::new();
static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();
static ROW_RE: OnceLock<Regex> = OnceLock::new();

fn separator(mode: RevealMode) -> &'static Regex {
    let (cell, pattern) = match mode {
        RevealMode::Word => (&WORD_RE, WORD_SEPARATOR),
        RevealMode::Sentence => (&SENTENCE_RE, SENTENCE_SEPARATOR),
        RevealMode::Row => (&ROW_RE, ROW_SEPARATOR),
    };
    cell.get_or_init(|| Regex::new(pattern).expect("separator pattern should compile"))
}

/// Split `text` into chunks for `mode`
///
/// Empty fragments are dropped; an empty text gives an empty sequence.
pub fn split(text: &str, mode: RevealMode) -> Vec<Chunk> {
    pieces(text, mode)
        .into_iter()
        .enumerate()
        .map(|(index, piece)| Chunk::new(mode, index, piece))
        .collect()
}

/// Separator and in-between slices of `text`, in order
fn pieces(text: &str, mode: RevealMode) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for found in separator(mode).find_iter(text) {
        if found.start() > last {
            pieces.push(&text[last..found.start()]);
        }
        pieces.push(found.as_str());
        last = found.end();
    }

    if last < text.len() {
        pieces.push(&text[last..]);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chunk::ChunkKind;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_word_split_keeps_whitespace() {
        let chunks = split("Hi there", RevealMode::Word);
        assert_eq!(texts(&chunks), vec!["Hi", " ", "there"]);
        assert_eq!(chunks[1].kind(), ChunkKind::Whitespace);
    }

    #[test]
    fn test_word_split_leading_and_trailing_space() {
        let chunks = split("  one\ttwo \n", RevealMode::Word);
        assert_eq!(texts(&chunks), vec!["  ", "one", "\t", "two", " \n"]);
        assert_eq!(chunks[4].kind(), ChunkKind::Newline);
    }

    #[test]
    fn test_sentence_split() {
        let chunks = split("Go now. Stop.", RevealMode::Sentence);
        assert_eq!(texts(&chunks), vec!["Go now", ". ", "Stop", "."]);
        assert_eq!(chunks[1].kind(), ChunkKind::Terminator);
    }

    #[test]
    fn test_sentence_split_gaps_and_newlines() {
        let gap = " ".repeat(12);
        let text = format!("Title\n\nBody text{gap}More?! Done");
        let chunks = split(&text, RevealMode::Sentence);
        assert_eq!(
            texts(&chunks),
            vec!["Title", "\n\n", "Body text", gap.as_str(), "More", "?! ", "Done"]
        );
        assert_eq!(chunks[3].kind(), ChunkKind::LargeGap);
    }

    #[test]
    fn test_sentence_punctuation_swallows_following_newlines() {
        let chunks = split("One.\n\nTwo", RevealMode::Sentence);
        assert_eq!(texts(&chunks), vec!["One", ".\n\n", "Two"]);
    }

    #[test]
    fn test_row_split() {
        let chunks = split("a\nb\nc", RevealMode::Row);
        assert_eq!(texts(&chunks), vec!["a", "\n", "b", "\n", "c"]);
    }

    #[test]
    fn test_row_split_consecutive_newlines() {
        let chunks = split("a\n\nb\n", RevealMode::Row);
        assert_eq!(texts(&chunks), vec!["a", "\n", "\n", "b", "\n"]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        for mode in RevealMode::ALL {
            assert!(split("", mode).is_empty());
        }
        assert_eq!(texts(&split("   ", RevealMode::Word)), vec!["   "]);
    }

    #[test]
    fn test_ids_follow_mode_and_position() {
        let chunks = split("a b", RevealMode::Word);
        let ids: Vec<_> = chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["chunk-word-0", "chunk-word-1", "chunk-word-2"]);
    }

    #[test]
    fn test_unicode_text_is_lossless() {
        let text = "日本語 テキスト。 Ünïcödé!\u{3000}end";
        for mode in RevealMode::ALL {
            let joined: String = split(text, mode).iter().map(|c| c.text.as_str()).collect();
            assert_eq!(joined, text);
        }
    }
}
