//! Saving and restoring `SessionState` as JSON under a fixed key.

use super::store::KeyValueStore;
use crate::core::{PersistenceError, SessionState, DEFAULT_STATE_KEY};

/// Serializes session state into an injected store.
///
/// `load` is forgiving: absent, unreadable, or malformed data all mean
/// "no saved game". `save` reports failures, and the engine decides what
/// to do with them.
#[derive(Clone, Debug)]
pub struct StatePersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StatePersistence<S> {
    /// Persist under the default `GameState` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STATE_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key the state is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Encode `state` and write it under the key.
    pub fn save(&mut self, state: &SessionState) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec(state)?;
        self.store.set(&self.key, bytes)?;
        Ok(())
    }

    /// Read the saved state, surfacing every failure.
    pub fn try_load(&self) -> Result<Option<SessionState>, PersistenceError> {
        match self.store.get(&self.key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Read the saved state. Failures are logged and treated as absence.
    pub fn load(&self) -> Option<SessionState> {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable saved state");
                None
            }
        }
    }

    /// Forget the saved state.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(&self.key)?;
        Ok(())
    }
}
