use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;

use super::errors::StorageError;

/// A string key-value store, the shape of a browser's local storage.
pub trait StorageBackend {
    /// Read a key. Missing keys and unreadable entries yield `None`.
    fn load(&self, key: &str) -> Option<String>;

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// File-per-key backend rooted at a base directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!("[FileBackend] failed to read '{}': {}", key, err);
                None
            }
        }
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process backend for tests and ephemeral demos.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let mut backend = MemoryBackend::default();
        assert_eq!(backend.load("queue_list"), None);
        backend.store("queue_list", "[]").expect("store");
        assert_eq!(backend.load("queue_list"), Some("[]".to_string()));
        backend.remove("queue_list").expect("remove");
        assert_eq!(backend.load("queue_list"), None);
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut backend = FileBackend::new(dir.path()).expect("backend");

        assert_eq!(backend.load("queue_counter"), None);
        backend.store("queue_counter", "42").expect("store");
        assert_eq!(backend.load("queue_counter"), Some("42".to_string()));

        backend.remove("queue_counter").expect("remove");
        assert_eq!(backend.load("queue_counter"), None);
        // Removing a missing key stays quiet.
        backend.remove("queue_counter").expect("remove twice");
    }

    #[test]
    fn test_file_backend_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let mut backend = FileBackend::new(dir.path()).expect("backend");
            backend.store("order_history", "[1,2,3]").expect("store");
        }
        let backend = FileBackend::new(dir.path()).expect("reopen");
        assert_eq!(backend.load("order_history"), Some("[1,2,3]".to_string()));
    }
}
