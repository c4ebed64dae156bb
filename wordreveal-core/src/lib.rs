//! Chunking and progressive reveal for active-recall study
//!
//! Study text is split into chunks (words, sentences or rows) and revealed a
//! few units at a time; hiding steps back exactly the way revealing stepped
//! forward.
//!
//! # Architecture
//!
//! - **Domain layer**: the chunker, the session value and the reveal engine,
//!   plus the hold-to-repeat timing state machine. No I/O.
//! - **API layer**: user settings, JSON persistence with safe fallbacks, and
//!   the progress figures shown around a study view.
//!
//! # Example
//!
//! ```rust
//! use wordreveal_core::{advance, retract, RevealMode, Session};
//!
//! let session = Session::new("Hi there", RevealMode::Word);
//!
//! let shown = advance(&session, 1);
//! assert_eq!(shown.current_index(), 2);
//! assert_eq!(shown.revealed_count(), 2);
//!
//! let hidden = retract(&shown, 1);
//! assert_eq!(hidden.current_index(), 0);
//! assert_eq!(hidden.revealed_count(), 0);
//! ```

pub mod api;
pub mod domain;
pub mod error;

pub use api::{
    default_data_dir, elapsed_ms, format_elapsed, progress_percent, remaining_units, FileStore,
    MemoryStore, Settings, Store, TextStats, Theme, FONT_SIZE_RANGE, SESSION_FILE, SETTINGS_FILE,
    STEP_RANGE,
};
pub use domain::*;
pub use error::{ParseModeError, ParseThemeError, SettingsError, StoreError, StoreResult};
