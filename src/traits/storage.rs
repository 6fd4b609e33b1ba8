//! Key-value storage trait abstraction.
//!
//! Mirrors a browser's `localStorage`: string keys, string values, whole
//! values overwritten on every write.

use crate::error::PersistenceError;

/// Persistent string key-value storage.
///
/// Implementations include the file-backed [`FileStore`] used by the binary
/// and the in-memory store used in tests.
///
/// [`FileStore`]: crate::adapters::FileStore
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if nothing is stored
    /// - `Err(error)` if the read failed
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        (**self).remove(key)
    }
}
