//! Application-facing API: settings, persistence and progress figures

mod settings;
mod stats;
mod storage;

pub use settings::{Settings, Theme, FONT_SIZE_RANGE, STEP_RANGE};
pub use stats::{elapsed_ms, format_elapsed, progress_percent, remaining_units, TextStats};
pub use storage::{
    default_data_dir, FileStore, MemoryStore, Store, SESSION_FILE, SETTINGS_FILE,
};
