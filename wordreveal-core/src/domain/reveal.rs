//! Reveal engine
//!
//! Moves the reveal cursor of a [`Session`] forward and backward by whole
//! units (words, sentences or rows).
//!
//! # Stops
//!
//! One forward step starting at cursor `from` walks chunk by chunk until it
//! crosses one *unit chunk*, then absorbs what belongs to that unit:
//!
//! - WORD: a unit is any non-blank chunk.
//! - SENTENCE: a unit is a terminator chunk, or a content chunk directly
//!   followed by a terminator, line break or large gap. After the unit, every
//!   following boundary chunk (whitespace, punctuation, line breaks, gaps) is
//!   absorbed.
//! - ROW: a unit is a line-break chunk.
//!
//! In every mode the step then absorbs whitespace that stays on the same
//! line, so the next hidden unit does not start with a visible space.
//!
//! Starting from index 0 this gives a chain of cursor positions (stops)
//! ending at the sequence length. Advancing moves forward along the chain and
//! retracting moves backward along the same chain, so a retract always undoes
//! the advance before it.

use super::chunk::{Chunk, ChunkKind, RevealMode};
use super::session::{now_millis, Session, Timestamp};
use rand::seq::SliceRandom;
use rand::Rng;

/// Whether crossing the chunk at `index` completes one unit
fn is_unit(chunks: &[Chunk], mode: RevealMode, index: usize) -> bool {
    let chunk = &chunks[index];
    match mode {
        RevealMode::Word => !chunk.kind.is_blank(),
        RevealMode::Sentence => match chunk.kind {
            ChunkKind::Terminator => true,
            ChunkKind::Content => chunks.get(index + 1).is_some_and(|next| {
                matches!(
                    next.kind,
                    ChunkKind::Terminator | ChunkKind::Newline | ChunkKind::LargeGap
                )
            }),
            _ => false,
        },
        RevealMode::Row => chunk.kind == ChunkKind::Newline,
    }
}

/// Cursor position after one step forward from `from`
pub fn next_stop(chunks: &[Chunk], mode: RevealMode, from: usize) -> usize {
    let len = chunks.len();
    let mut index = from;

    while index < len {
        let unit = is_unit(chunks, mode, index);
        index += 1;
        if !unit {
            continue;
        }

        if mode == RevealMode::Sentence {
            while index < len && chunks[index].kind.is_boundary() {
                index += 1;
            }
        }
        while index < len && chunks[index].kind.is_inline_space() {
            index += 1;
        }
        return index;
    }

    len
}

/// Every stop strictly before `cursor`, starting with 0
fn stops_before(chunks: &[Chunk], mode: RevealMode, cursor: usize) -> Vec<usize> {
    let mut stops = vec![0];
    let mut at = 0;
    loop {
        let next = next_stop(chunks, mode, at);
        if next >= cursor || next == at {
            return stops;
        }
        stops.push(next);
        at = next;
    }
}

/// The full chain of stops for a chunk sequence, from 0 to its length
pub fn unit_stops(chunks: &[Chunk], mode: RevealMode) -> Vec<usize> {
    let mut stops = stops_before(chunks, mode, chunks.len());
    if !chunks.is_empty() {
        stops.push(chunks.len());
    }
    stops
}

/// Reveal the next `count` units, recording the start time as now
pub fn advance(session: &Session, count: usize) -> Session {
    advance_at(session, count, now_millis())
}

/// Reveal the next `count` units
///
/// Returns the session unchanged when `count` is 0 or the cursor is already
/// at the end. The first reveal records `now` as the start time.
pub fn advance_at(session: &Session, count: usize, now: Timestamp) -> Session {
    let len = session.chunks.len();
    let from = session.current_index;
    if count == 0 || from >= len {
        return session.clone();
    }

    let mut to = from;
    for _ in 0..count {
        if to >= len {
            break;
        }
        to = next_stop(&session.chunks, session.mode, to);
    }

    let mut next = session.clone();
    for chunk in &mut next.chunks[from..to] {
        chunk.revealed = true;
    }
    next.current_index = to;
    next.revealed_count = next.count_revealed();
    next.mark_started(now);

    log::trace!(
        "advance {count} {}: {from} -> {to} of {len}",
        session.mode
    );
    next
}

/// Hide the last `count` revealed units
///
/// Returns the session unchanged when `count` is 0 or the cursor is at 0.
/// The start time is left alone.
pub fn retract(session: &Session, count: usize) -> Session {
    let from = session.current_index.min(session.chunks.len());
    if count == 0 || from == 0 {
        return session.clone();
    }

    let stops = stops_before(&session.chunks, session.mode, from);
    let to = stops
        .len()
        .checked_sub(count)
        .map_or(0, |position| stops[position]);

    let mut next = session.clone();
    for chunk in &mut next.chunks[to..from] {
        chunk.revealed = false;
    }
    next.current_index = to;
    next.revealed_count = next.count_revealed();

    log::trace!("retract {count} {}: {from} -> {to}", session.mode);
    next
}

/// Flip the highlight of the chunk with `chunk_id`
///
/// An unknown id leaves the session unchanged.
pub fn toggle_highlight(session: &Session, chunk_id: &str) -> Session {
    let mut next = session.clone();
    if let Some(chunk) = next.chunks.iter_mut().find(|c| c.id == chunk_id) {
        chunk.highlighted = !chunk.highlighted;
    }
    next
}

/// Hide and unhighlight everything and forget the start time
pub fn reset(session: &Session) -> Session {
    let mut next = session.clone();
    for chunk in &mut next.chunks {
        chunk.revealed = false;
        chunk.highlighted = false;
    }
    next.current_index = 0;
    next.revealed_count = 0;
    next.start_time = None;
    next
}

/// Randomly reorder the chunks and start over from the beginning
pub fn shuffle(session: &Session) -> Session {
    shuffle_with(session, &mut rand::thread_rng())
}

/// [`shuffle`] with a caller-provided random generator
///
/// Reveal flags are cleared so that every chunk after the cursor is hidden;
/// highlights travel with their chunks.
pub fn shuffle_with<R: Rng + ?Sized>(session: &Session, rng: &mut R) -> Session {
    let mut next = session.clone();
    next.chunks.shuffle(rng);
    for chunk in &mut next.chunks {
        chunk.revealed = false;
    }
    next.current_index = 0;
    next.revealed_count = 0;
    next
}
