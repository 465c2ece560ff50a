//! # word-forge
//!
//! Engine for a single-player word-derivation game: given a base word,
//! the player finds other words spelled from its letters.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering or prompting. A presentation layer
//!    calls `new_round`/`submit` and renders what comes back.
//!
//! 2. **Injected Capabilities**: The dictionary (`SpellOracle`) and the
//!    storage (`KeyValueStore`) are supplied by the host, so the engine
//!    is testable without a platform.
//!
//! 3. **Outcomes, Not Errors**: Rejected answers are `SubmitOutcome`
//!    values. Storage and word-source failures are recovered locally.
//!
//! ## Rules
//!
//! An answer is accepted when, in this order:
//! - its letters are a sub-multiset of the base word's and it is not the
//!   base word itself,
//! - it has not been accepted already this round (case-insensitive),
//! - it is at least three letters long and the oracle knows it.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, session state, errors
//! - `words`: Word bank and letter-pool arithmetic
//! - `dictionary`: Oracle contract and checkers
//! - `persistence`: Key-value stores and state serialization
//! - `engine`: Round lifecycle and answer validation

pub mod core;
pub mod dictionary;
pub mod engine;
pub mod persistence;
pub mod words;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, PersistenceError, SessionState, StoreError, WordSourceError};

pub use crate::words::{is_possible, LetterPool, WordBank};

pub use crate::dictionary::{AcceptAll, DictionaryChecker, SpellOracle, WordListOracle};

pub use crate::persistence::{FileStore, KeyValueStore, MemoryStore, StatePersistence};

pub use crate::engine::{GameEngine, GameEngineBuilder, OutcomeKind, RoundPhase, SubmitOutcome};
