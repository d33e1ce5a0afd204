//! Key-value storage backends
//!
//! Collections are persisted as opaque text blobs under fixed keys. The
//! [`KeyValueStore`] trait is the only thing the repository knows about
//! storage, so tests swap the on-disk [`FileStore`] for a [`MemoryStore`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Durable string-to-string storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool, StorageError>;

    /// All keys currently present, sorted
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key '{0}': only letters, digits, '_' and '-' are allowed")]
    InvalidKey(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// In-process store, used by tests and dry runs
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        check_key(key)?;
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// Directory-backed store: each key is a `<key>.json` file
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Write {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StorageError::Write { path, source })
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        check_key(key)?;
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StorageError::Write { path, source }),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| StorageError::Read {
            path: self.dir.clone(),
            source,
        })?;

        let mut keys: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map_or(false, |ext| ext == "json"))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
            .filter(|k| check_key(k).is_ok())
            .collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("cars").unwrap(), None);

        store.set("cars", "[]").unwrap();
        assert_eq!(store.get("cars").unwrap().as_deref(), Some("[]"));

        assert!(store.remove("cars").unwrap());
        assert!(!store.remove("cars").unwrap());
        assert_eq!(store.get("cars").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let mut store = MemoryStore::new();
        let err = store.set("../escape", "x").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let tmp = tempdir().unwrap();
        {
            let mut store = FileStore::open(tmp.path().join("store")).unwrap();
            store.set("emphathon_cars", "[1,2]").unwrap();
        }

        let store = FileStore::open(tmp.path().join("store")).unwrap();
        assert_eq!(store.get("emphathon_cars").unwrap().as_deref(), Some("[1,2]"));
        assert!(store.path_for("emphathon_cars").exists());
    }

    #[test]
    fn test_file_store_keys_sorted_and_json_only() {
        let tmp = tempdir().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();
        store.set("b_key", "[]").unwrap();
        store.set("a_key", "[]").unwrap();
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["a_key", "b_key"]);
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let tmp = tempdir().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
        assert!(!store.remove("absent").unwrap());
    }
}
