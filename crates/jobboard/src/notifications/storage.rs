use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing data exists but cannot be read as a store.
    #[error("Storage is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// String values under string keys.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// All keys in one JSON object on disk.
///
/// Writes go to a sibling temporary file that is then renamed over the original, so a
/// crash mid-write leaves the previous contents intact.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "Replacing corrupt storage file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        let temp = self.temp_path();
        fs::write(&temp, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// Process-local store, for tests and for running without a disk.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.read("k").unwrap().is_none());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        assert!(store.read("a").unwrap().is_none());

        store.write("a", "1").unwrap();
        store.write("b", "2").unwrap();
        store.write("a", "3").unwrap();

        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.read("a").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.read("b").unwrap().as_deref(), Some("2"));
        assert!(!dir.path().join("store.json.tmp").exists());
    }

    #[test]
    fn test_file_store_reports_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(store.read("a"), Err(StorageError::Corrupt(_))));
        store.write("a", "fresh").unwrap();
        assert_eq!(store.read("a").unwrap().as_deref(), Some("fresh"));
    }
}
