//! Key-value preference storage.
//!
//! The browser keeps the dark-mode flag in `localStorage`; this module is the
//! Rust-side equivalent. [`Storage`] is a string-to-string store whose
//! operations are fallible, so callers decide how to degrade when the backing
//! medium is missing or corrupted.
//!
//! Two implementations:
//!
//! - [`MemoryStorage`]: a plain map, used by tests and previews.
//! - [`FileStorage`]: a JSON object on disk, used by the CLI:
//!
//! ```json
//! {
//!   "darkMode": "true"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupted storage file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub trait Storage {
    /// Value stored under `key`, or `None` if nothing was ever written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, e.g. to simulate a value left by an earlier visit.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = BTreeMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Location of the CLI's preference file, relative to the site source directory.
pub const STATE_FILE: &str = ".engineer-portfolio/state.json";

/// JSON-file backed storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The preference file of the site in `source`, independent of the
    /// working directory.
    pub fn for_site(source: &Path) -> Self {
        Self::new(source.join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupted file is replaced rather than blocking every future write.
        let mut items = match self.read_items() {
            Ok(items) => items,
            Err(StorageError::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding corrupted storage file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_storage_empty_returns_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("darkMode").unwrap(), None);
    }

    #[test]
    fn memory_storage_set_then_get() {
        let mut storage = MemoryStorage::new();
        storage.set_item("darkMode", "true").unwrap();
        assert_eq!(storage.get_item("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn memory_storage_with_item() {
        let storage = MemoryStorage::with_item("darkMode", "false");
        assert_eq!(storage.get_item("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn file_storage_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::new(tmp.path().join("prefs.json"));
        assert_eq!(storage.get_item("darkMode").unwrap(), None);
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/prefs.json");

        let mut first = FileStorage::new(&path);
        first.set_item("darkMode", "true").unwrap();

        let second = FileStorage::new(&path);
        assert_eq!(second.get_item("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn file_storage_keeps_other_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        let mut storage = FileStorage::new(&path);
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn file_storage_corrupted_read_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get_item("darkMode"),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn file_storage_write_replaces_corrupted_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, "garbage").unwrap();
        let mut storage = FileStorage::new(&path);
        storage.set_item("darkMode", "false").unwrap();
        assert_eq!(storage.get_item("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn file_storage_empty_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, "").unwrap();
        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item("darkMode").unwrap(), None);
    }

    #[test]
    fn site_storage_lives_under_source() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::for_site(tmp.path());
        assert_eq!(storage.path(), tmp.path().join(".engineer-portfolio/state.json"));
    }

    #[test]
    fn site_storage_is_shared_by_every_handle() {
        let tmp = TempDir::new().unwrap();
        let mut first = FileStorage::for_site(tmp.path());
        first.set_item("darkMode", "true").unwrap();

        let second = FileStorage::for_site(tmp.path());
        assert_eq!(second.get_item("darkMode").unwrap().as_deref(), Some("true"));
    }
}
