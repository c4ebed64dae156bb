//! Input handling module

pub mod file_reader;
pub mod keys;
pub mod swipe;

pub use file_reader::FileReader;
pub use keys::{key_name, KeyBinding};
pub use swipe::{Swipe, SwipeTracker};
