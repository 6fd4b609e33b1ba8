//! In-memory key-value store for testing.
//!
//! Stores blobs in a shared map so tests can inspect what the app persisted
//! and inject read or write failures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::PersistenceError;
use crate::traits::KeyValueStore;

/// In-memory key-value store for testing.
///
/// Clones share the same map, so a test can keep one handle while the app
/// owns another.
///
/// # Example
///
/// ```ignore
/// use healthhub::adapters::mock::InMemoryStore;
/// use healthhub::traits::KeyValueStore;
///
/// let mut store = InMemoryStore::new();
/// store.set("healthhub_preferences", "{}")?;
/// assert_eq!(store.value("healthhub_preferences").as_deref(), Some("{}"));
///
/// store.set_set_should_fail(true);
/// assert!(store.set("healthhub_preferences", "{}").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Stored values
    values: Arc<Mutex<HashMap<String, String>>>,
    /// Whether get should fail
    get_should_fail: Arc<Mutex<bool>>,
    /// Whether set should fail
    set_should_fail: Arc<Mutex<bool>>,
    /// Number of successful writes
    writes: Arc<Mutex<usize>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one value already present.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.put(key, value);
        store
    }

    /// Configure whether get should fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self.get_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether set and remove should fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    /// Read a value without going through the trait (for assertions).
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Write a value without going through the trait (for seeding).
    pub fn put(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn unavailable(key: &str) -> PersistenceError {
        PersistenceError::Unavailable {
            key: key.to_string(),
            reason: "mock storage failure".to_string(),
        }
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(Self::unavailable(key));
        }
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(Self::unavailable(key));
        }
        self.put(key, value);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(Self::unavailable(key));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let store = InMemoryStore::new();
        let mut handle = store.clone();
        handle.set("k", "v").unwrap();
        assert_eq!(store.value("k").as_deref(), Some("v"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_get_failure() {
        let store = InMemoryStore::with_value("k", "v");
        store.set_get_should_fail(true);
        assert!(matches!(
            store.get("k"),
            Err(PersistenceError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_set_failure_leaves_value() {
        let mut store = InMemoryStore::with_value("k", "old");
        store.set_set_should_fail(true);
        assert!(store.set("k", "new").is_err());
        assert!(store.remove("k").is_err());
        assert_eq!(store.value("k").as_deref(), Some("old"));
        assert_eq!(store.write_count(), 0);
    }
}
