//! Progress figures shown around the study view

use crate::domain::{Session, Timestamp};

/// Format a duration as `MM:SS`, or `HH:MM:SS` once it reaches an hour
///
/// Hours wrap at 24.
pub fn format_elapsed(ms: u64) -> String {
    let seconds = (ms / 1000) % 60;
    let minutes = (ms / (1000 * 60)) % 60;
    let hours = (ms / (1000 * 60 * 60)) % 24;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Milliseconds since the session started, 0 when it has not
pub fn elapsed_ms(session: &Session, now: Timestamp) -> u64 {
    session
        .start_time()
        .map_or(0, |start| u64::try_from(now - start).unwrap_or(0))
}

/// Share of revealed chunks, 0.0 to 100.0
pub fn progress_percent(session: &Session) -> f64 {
    if session.is_empty() {
        return 0.0;
    }
    session.revealed_count() as f64 / session.len() as f64 * 100.0
}

/// Non-blank chunks not yet visited by the cursor
pub fn remaining_units(session: &Session) -> usize {
    session
        .chunks()
        .get(session.current_index()..)
        .unwrap_or_default()
        .iter()
        .filter(|c| !c.is_blank())
        .count()
}

/// Word and character counts of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }
}
