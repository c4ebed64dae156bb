//! Persistence of settings and session
//!
//! Settings and session are stored as two independent JSON documents.
//! Loading never fails: a missing document gives the defaults (or the demo
//! session), and a damaged one is logged and replaced by the same fallback.

use super::settings::Settings;
use crate::domain::Session;
use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the stored session
pub const SESSION_FILE: &str = "wordreveal_app_state.json";

/// File name of the stored settings
pub const SETTINGS_FILE: &str = "wordreveal_settings.json";

/// Where settings and session live
pub trait Store {
    /// Stored settings, or the defaults
    fn load_settings(&self) -> Settings;

    fn save_settings(&self, settings: &Settings) -> StoreResult<()>;

    /// Stored session, or the demo session
    fn load_session(&self) -> Session;

    fn save_session(&self, session: &Session) -> StoreResult<()>;
}

/// Decode stored settings, falling back to the defaults
fn decode_settings(raw: Option<&str>, origin: &str) -> Settings {
    let Some(settings) = decode::<Settings>(raw, origin) else {
        return Settings::default();
    };
    match settings.validate() {
        Ok(()) => settings,
        Err(e) => {
            log::warn!("Ignoring invalid settings in {origin}: {e}");
            Settings::default()
        }
    }
}

/// Decode a stored session, falling back to the demo session
fn decode_session(raw: Option<&str>, origin: &str) -> Session {
    decode::<Session>(raw, origin)
        .map(Session::normalized)
        .unwrap_or_else(Session::demo)
}

fn decode<T: DeserializeOwned>(raw: Option<&str>, origin: &str) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(value) => {
            log::debug!("Loaded {origin}");
            Some(value)
        }
        Err(e) => {
            log::warn!("Ignoring unreadable {origin}: {e}");
            None
        }
    }
}

/// JSON files in a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store files under `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store files under [`default_data_dir`]
    pub fn open_default() -> Self {
        Self::new(default_data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn read(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No stored state at {}", path.display());
                None
            }
            Err(e) => {
                log::warn!("Failed to read {}: {e}", path.display());
                None
            }
        }
    }

    /// Write through a sibling temporary file so a crash never leaves half a document
    fn write(&self, path: &Path, contents: &str) -> StoreResult<()> {
        let io_error = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_error)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(io_error)?;
        fs::rename(&tmp, path).map_err(io_error)?;

        log::debug!("Saved {}", path.display());
        Ok(())
    }
}

impl Store for FileStore {
    fn load_settings(&self) -> Settings {
        let path = self.settings_path();
        decode_settings(Self::read(&path).as_deref(), &path.display().to_string())
    }

    fn save_settings(&self, settings: &Settings) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(settings)?;
        self.write(&self.settings_path(), &json)
    }

    fn load_session(&self) -> Session {
        let path = self.session_path();
        decode_session(Self::read(&path).as_deref(), &path.display().to_string())
    }

    fn save_session(&self, session: &Session) -> StoreResult<()> {
        let json = serde_json::to_string(session)?;
        self.write(&self.session_path(), &json)
    }
}

/// In-memory store holding the raw JSON documents
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RefCell<Option<String>>,
    session: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw documents, valid or not
    pub fn with_raw(settings: Option<&str>, session: Option<&str>) -> Self {
        Self {
            settings: RefCell::new(settings.map(str::to_string)),
            session: RefCell::new(session.map(str::to_string)),
        }
    }

    /// Raw session document, if one was saved
    pub fn raw_session(&self) -> Option<String> {
        self.session.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load_settings(&self) -> Settings {
        decode_settings(self.settings.borrow().as_deref(), "stored settings")
    }

    fn save_settings(&self, settings: &Settings) -> StoreResult<()> {
        *self.settings.borrow_mut() = Some(serde_json::to_string(settings)?);
        Ok(())
    }

    fn load_session(&self) -> Session {
        decode_session(self.session.borrow().as_deref(), "stored session")
    }

    fn save_session(&self, session: &Session) -> StoreResult<()> {
        *self.session.borrow_mut() = Some(serde_json::to_string(session)?);
        Ok(())
    }
}

/// `<platform data dir>/wordreveal`, or `.wordreveal` when there is none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("wordreveal"))
        .unwrap_or_else(|| PathBuf::from(".wordreveal"))
}
