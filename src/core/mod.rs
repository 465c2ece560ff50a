//! Core engine types: configuration, RNG, session state, errors.
//!
//! Everything here is independent of where words, dictionaries, and
//! storage come from. Hosts configure behavior via `EngineConfig`.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{
    EngineConfig, DEFAULT_FALLBACK_WORD, DEFAULT_LANGUAGE, DEFAULT_MIN_WORD_LENGTH, DEFAULT_STATE_KEY,
};
pub use error::{PersistenceError, StoreError, WordSourceError};
pub use rng::GameRng;
pub use state::SessionState;
