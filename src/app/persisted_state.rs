// SPDX-License-Identifier: MPL-2.0
//! Viewer position persistence using CBOR format.
//!
//! The current card index survives restarts. It is stored separately from
//! the user-editable TOML preferences, in `state.cbor` inside the data
//! directory.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `CARD_DECK_DATA_DIR` environment variable (or `--data-dir`)
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last displayed card index. Stored raw; normalised against the
    /// gallery length when a session starts.
    #[serde(default)]
    pub current_index: Option<i64>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning key explaining what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(error) => {
                        tracing::warn!(path = %path.display(), %error, "discarding unreadable state");
                        (Self::default(), Some("state-parse-error".to_string()))
                    }
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "cannot open state file");
                (Self::default(), Some("state-read-error".to_string()))
            }
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns an optional warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

/// Where the viewer position is read from and written to.
pub trait PositionStore {
    /// Raw persisted index, `None` when nothing usable is stored.
    fn load_position(&self) -> Option<i64>;

    /// Records a new index. Returns a warning key when the write failed.
    fn save_position(&mut self, index: usize) -> Option<String>;
}

/// [`PositionStore`] backed by `state.cbor`.
#[derive(Debug, Clone, Default)]
pub struct FileStateStore {
    base_dir: Option<PathBuf>,
    state: AppState,
}

impl FileStateStore {
    /// Opens the store, returning any load warning alongside it.
    pub fn open(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (state, warning) = AppState::load_from(base_dir.clone());
        (Self { base_dir, state }, warning)
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl PositionStore for FileStateStore {
    fn load_position(&self) -> Option<i64> {
        self.state.current_index
    }

    fn save_position(&mut self, index: usize) -> Option<String> {
        self.state.current_index = i64::try_from(index).ok();
        self.state.save_to(self.base_dir.clone())
    }
}

/// In-memory [`PositionStore`] for headless sessions and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPositionStore {
    index: Option<i64>,
    writes: usize,
}

impl MemoryPositionStore {
    #[must_use]
    pub fn with_index(index: i64) -> Self {
        Self {
            index: Some(index),
            writes: 0,
        }
    }

    /// Number of successful `save_position` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PositionStore for MemoryPositionStore {
    fn load_position(&self) -> Option<i64> {
        self.index
    }

    fn save_position(&mut self, index: usize) -> Option<String> {
        self.index = i64::try_from(index).ok();
        self.writes += 1;
        None
    }
}
