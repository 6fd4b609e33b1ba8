//! File-backed key-value store.
//!
//! Each key is one file, `<dir>/<key>.json`. Writes go to a sibling
//! `.tmp` file first and are renamed into place so a crash mid-write never
//! leaves a truncated blob behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::traits::KeyValueStore;

/// The key-value store used by the binary.
///
/// Stored under `~/.healthhub/` unless a data directory is configured.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the blobs.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PersistenceError::Unavailable {
                key: key.to_string(),
                reason: "key must be non-empty ASCII letters, digits, '_' or '-'".to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn io_err(key: &str, path: &Path, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            key: key.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_err(key, &path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_err(key, &self.dir, e))?;

        let tmp_path = path.with_extension("json.tmp");
        let write = || -> io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &path)
        };
        write().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            Self::io_err(key, &path, e)
        })?;

        tracing::debug!(key, bytes = value.len(), "stored blob");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_err(key, &path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert!(store.get("healthhub_preferences").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("nested"));

        store.set("healthhub_preferences", r#"{"weight":70}"#).unwrap();
        assert_eq!(
            store.get("healthhub_preferences").unwrap().as_deref(),
            Some(r#"{"weight":70}"#)
        );
        assert!(temp_dir.path().join("nested/healthhub_preferences.json").exists());
        assert!(!temp_dir
            .path()
            .join("nested/healthhub_preferences.json.tmp")
            .exists());
    }

    #[test]
    fn test_set_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        assert!(matches!(
            store.set("../escape", "v"),
            Err(PersistenceError::Unavailable { .. })
        ));
        assert!(store.get("").is_err());
    }
}
