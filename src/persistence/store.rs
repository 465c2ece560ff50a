//! Key-value store contract and the in-memory backend.
//!
//! The engine never talks to platform storage directly. Hosts inject a
//! `KeyValueStore`; the engine writes one value under one fixed key.

use rustc_hash::FxHashMap;

use crate::core::StoreError;

/// Byte-oriented key-value storage.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Delete the value under `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Store held entirely in memory.
///
/// Used by tests and by hosts that do their own flushing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the raw bytes under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.values.get(key).map(Vec::as_slice)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}
