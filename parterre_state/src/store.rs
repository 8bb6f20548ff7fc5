// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistence of selected seat ids per venue.
//!
//! A selection is stored under the key `{prefix}-{venue_id}` (prefix
//! `seat-selection` by default) as a JSON array of seat ids.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default storage key prefix.
pub const DEFAULT_KEY_PREFIX: &str = "seat-selection";

/// Failure to save, load, or clear a stored selection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The stored value is not a JSON array of strings.
    #[error("stored selection is malformed: {0}")]
    Json(#[from] serde_json::Error),
    /// No platform data directory could be determined.
    #[error("no data directory available for selection storage")]
    NoDataDir,
}

/// The storage key for a venue's selection.
#[must_use]
pub fn storage_key(prefix: &str, venue_id: &str) -> String {
    format!("{prefix}-{venue_id}")
}

/// Saves and restores the selected seat ids of a venue.
pub trait SelectionStore {
    /// Replaces the stored selection for `venue_id`.
    fn save(&self, venue_id: &str, seat_ids: &[String]) -> Result<(), StoreError>;

    /// The stored selection for `venue_id`, empty if nothing is stored.
    fn load(&self, venue_id: &str) -> Result<Vec<String>, StoreError>;

    /// Removes the stored selection for `venue_id`.
    fn clear(&self, venue_id: &str) -> Result<(), StoreError>;
}

/// One JSON file per venue under a directory.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    prefix: String,
}

impl JsonFileStore {
    /// Store under the platform data directory (`.../parterre`).
    pub fn new() -> Result<Self, StoreError> {
        let base = dirs::data_local_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::with_dir(base.join("parterre")))
    }

    /// Store under `dir`, which is created on first save.
    #[must_use]
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: DEFAULT_KEY_PREFIX.to_owned(),
        }
    }

    /// Replaces the key prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Directory holding the files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `venue_id`.
    ///
    /// Characters other than ASCII alphanumerics, `-`, `_`, and `.` are
    /// replaced with `_` so an id cannot name a path outside the directory.
    #[must_use]
    pub fn path_for(&self, venue_id: &str) -> PathBuf {
        let key: String = storage_key(&self.prefix, venue_id)
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{key}.json"))
    }
}

impl SelectionStore for JsonFileStore {
    fn save(&self, venue_id: &str, seat_ids: &[String]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_vec(seat_ids)?;
        fs::write(self.path_for(venue_id), body)?;
        Ok(())
    }

    fn load(&self, venue_id: &str) -> Result<Vec<String>, StoreError> {
        let path = self.path_for(venue_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let body = fs::read(&path)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn clear(&self, venue_id: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(venue_id)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-process store keyed like [`JsonFileStore`]; nothing outlives it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored value for `venue_id`, as JSON text.
    #[must_use]
    pub fn raw(&self, venue_id: &str) -> Option<String> {
        self.entries
            .borrow()
            .get(&storage_key(DEFAULT_KEY_PREFIX, venue_id))
            .cloned()
    }

    /// Stores raw text for `venue_id`, valid or not.
    pub fn insert_raw(&self, venue_id: &str, value: impl Into<String>) {
        self.entries
            .borrow_mut()
            .insert(storage_key(DEFAULT_KEY_PREFIX, venue_id), value.into());
    }
}

impl SelectionStore for MemoryStore {
    fn save(&self, venue_id: &str, seat_ids: &[String]) -> Result<(), StoreError> {
        let value = serde_json::to_string(seat_ids)?;
        self.insert_raw(venue_id, value);
        Ok(())
    }

    fn load(&self, venue_id: &str) -> Result<Vec<String>, StoreError> {
        match self.raw(venue_id) {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(Vec::new()),
        }
    }

    fn clear(&self, venue_id: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .remove(&storage_key(DEFAULT_KEY_PREFIX, venue_id));
        Ok(())
    }
}

impl<S: SelectionStore + ?Sized> SelectionStore for std::rc::Rc<S> {
    fn save(&self, venue_id: &str, seat_ids: &[String]) -> Result<(), StoreError> {
        (**self).save(venue_id, seat_ids)
    }

    fn load(&self, venue_id: &str) -> Result<Vec<String>, StoreError> {
        (**self).load(venue_id)
    }

    fn clear(&self, venue_id: &str) -> Result<(), StoreError> {
        (**self).clear(venue_id)
    }
}
