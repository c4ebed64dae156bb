//! Study session state

use super::chunk::{Chunk, RevealMode};
use super::chunker::split;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Current wall-clock time as a [`Timestamp`]
pub fn now_millis() -> Timestamp {
    Utc::now().timestamp_millis()
}

/// Text shown when nothing has been stored yet
pub const DEMO_TEXT: &str = "WordReveal: The Ultimate Study Assistant

To start, simply paste your study material into the editor. Use the arrow keys (or the on-screen buttons on mobile) to reveal text bit by bit. This technique, known as active recall, is highly effective for memorization.

Features included in this tool:
1. Dynamic Reveal Modes: Switch between word, sentence, or line reveal.
2. Customization: Adjust font size, themes, and key bindings.
3. Progress Tracking: See how much you've covered in real-time.
4. Highlight Mode: Mark critical parts to keep them visible at all times.
5. Mobile Optimized: Swipe or tap to reveal on the go.

Start practicing today and watch your retention skyrocket!";

/// Text, chunk sequence, reveal cursor and practice metadata
///
/// Sessions are values: the reveal engine never mutates one in place but
/// returns an updated copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub(crate) original_text: String,
    #[serde(default)]
    pub(crate) mode: RevealMode,
    pub(crate) chunks: Vec<Chunk>,
    #[serde(default)]
    pub(crate) current_index: usize,
    #[serde(default)]
    pub(crate) revealed_count: usize,
    #[serde(default)]
    pub(crate) start_time: Option<Timestamp>,
    #[serde(default)]
    pub(crate) streak: u32,
    #[serde(default)]
    pub(crate) last_practice_date: Option<NaiveDate>,
}

impl Session {
    /// Chunk `text` for `mode` into a fresh session
    pub fn new(text: impl Into<String>, mode: RevealMode) -> Self {
        let original_text = text.into();
        Self {
            chunks: split(&original_text, mode),
            original_text,
            mode,
            current_index: 0,
            revealed_count: 0,
            start_time: None,
            streak: 0,
            last_practice_date: None,
        }
    }

    /// The built-in welcome session
    pub fn demo() -> Self {
        Self::new(DEMO_TEXT, RevealMode::default())
    }

    /// Replace the text and rebuild; practice history is kept
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        let mut rebuilt = Self::new(text, self.mode);
        rebuilt.streak = self.streak;
        rebuilt.last_practice_date = self.last_practice_date;
        rebuilt
    }

    /// Rebuild for another mode; an unchanged mode keeps all progress
    pub fn with_mode(&self, mode: RevealMode) -> Self {
        if mode == self.mode {
            return self.clone();
        }
        let mut rebuilt = Self::new(self.original_text.clone(), mode);
        rebuilt.streak = self.streak;
        rebuilt.last_practice_date = self.last_practice_date;
        rebuilt
    }

    /// Repair a session read from storage
    ///
    /// Clamps the cursor into the sequence and recounts revealed chunks.
    pub fn normalized(mut self) -> Self {
        self.current_index = self.current_index.min(self.chunks.len());
        self.revealed_count = self.count_revealed();
        self
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Index of the first chunk the engine has not visited
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// When the first chunk of this run was revealed
    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    /// Consecutive practice days
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_practice_date(&self) -> Option<NaiveDate> {
        self.last_practice_date
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Every chunk revealed
    pub fn is_complete(&self) -> bool {
        !self.chunks.is_empty() && self.revealed_count == self.chunks.len()
    }

    /// Look up a chunk by id
    pub fn chunk(&self, id: &str) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.id == id)
    }

    pub(crate) fn count_revealed(&self) -> usize {
        self.chunks.iter().filter(|c| c.revealed).count()
    }

    /// Record a practice run starting at `now`
    pub(crate) fn mark_started(&mut self, now: Timestamp) {
        if self.start_time.is_some() {
            return;
        }
        self.start_time = Some(now);
        if let Some(today) = DateTime::from_timestamp_millis(now).map(|t| t.date_naive()) {
            self.record_practice(today);
        }
    }

    fn record_practice(&mut self, today: NaiveDate) {
        self.streak = match self.last_practice_date {
            Some(last) if last == today => self.streak.max(1),
            Some(last) if last.succ_opt() == Some(today) => self.streak.saturating_add(1),
            _ => 1,
        };
        self.last_practice_date = Some(today);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::demo()
    }
}
