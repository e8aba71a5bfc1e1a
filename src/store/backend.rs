//! Key-value storage backends for the local list store.
//!
//! ARCHITECTURE
//! ============
//! The store never touches the storage medium directly; it goes through
//! [`KvBackend`] so the file-backed namespace can be swapped for an
//! in-memory map in tests. Values are opaque strings (serialized JSON);
//! the store owns the shape of what goes in them.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Error writing to or removing from a backend.
///
/// Reads never error: an unreadable or missing value is `None`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to create data dir {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to remove {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },
}

/// String-keyed durable namespace shared by all store values.
pub trait KvBackend {
    /// Read the raw value for `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key` atomically.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// File-per-key backend rooted at a data directory.
///
/// Each key lives at `<dir>/<key>.json` and is replaced wholesale via a
/// temp-file write followed by a rename, so readers never observe a
/// partially written value.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .map_err(|source| StorageError::CreateDir { path: self.dir.clone(), source })?;

        let path = self.key_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| StorageError::Write { path: tmp.clone(), source })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Write { path, source })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove { path, source }),
        }
    }
}

/// In-memory backend used as a test double for [`FileBackend`].
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
