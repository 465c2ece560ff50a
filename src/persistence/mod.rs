//! Session persistence.
//!
//! - `KeyValueStore`: the injected storage contract
//! - `MemoryStore` / `FileStore`: bundled backends
//! - `StatePersistence`: JSON encoding of `SessionState` under one key

pub mod file;
pub mod state;
pub mod store;

pub use file::FileStore;
pub use state::StatePersistence;
pub use store::{KeyValueStore, MemoryStore};
