//! Domain layer: chunking, session state and the reveal engine
//!
//! Everything here is deterministic and free of I/O. Time only enters
//! through explicit timestamps and instants passed in by the caller.

pub mod chunk;
pub mod chunker;
pub mod repeat;
pub mod reveal;
pub mod session;

pub use chunk::{Chunk, ChunkKind, RevealMode};
pub use chunker::split;
pub use repeat::{
    HoldRepeat, Release, RepeatPhase, DEFAULT_HOLD_DELAY, DEFAULT_REPEAT_INTERVAL,
};
pub use reveal::{
    advance, advance_at, next_stop, reset, retract, shuffle, shuffle_with, toggle_highlight,
    unit_stops,
};
pub use session::{now_millis, Session, Timestamp, DEMO_TEXT};
