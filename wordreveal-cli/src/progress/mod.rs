//! Progress reporting module

use serde::Serialize;
use wordreveal_core::{
    elapsed_ms, format_elapsed, progress_percent, remaining_units, RevealMode, Session, Timestamp,
};

/// Fixed-width bar such as `[####------]`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Progress figures of a session at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub mode: RevealMode,
    pub revealed: usize,
    pub total: usize,
    pub percent: f64,
    /// Non-blank chunks still hidden after the cursor
    pub remaining: usize,
    pub elapsed_ms: u64,
    pub elapsed: String,
    pub streak: u32,
    pub complete: bool,
}

impl StatusReport {
    pub fn of(session: &Session, now: Timestamp) -> Self {
        let elapsed = elapsed_ms(session, now);
        Self {
            mode: session.mode(),
            revealed: session.revealed_count(),
            total: session.len(),
            percent: progress_percent(session),
            remaining: remaining_units(session),
            elapsed_ms: elapsed,
            elapsed: format_elapsed(elapsed),
            streak: session.streak(),
            complete: session.is_complete(),
        }
    }

    /// One-line summary printed after session commands
    pub fn status_line(&self) -> String {
        format!(
            "{} {:.2}% | {}/{} revealed | {} left | {} | {} | streak {}",
            progress_bar(self.percent, 20),
            self.percent,
            self.revealed,
            self.total,
            self.remaining,
            self.elapsed,
            self.mode,
            self.streak
        )
    }
}
