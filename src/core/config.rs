//! Engine configuration.
//!
//! Hosts configure the engine at startup with an `EngineConfig`. Every
//! field has a default matching the classic game, so most hosts only
//! override the language or the persistence key.

use serde::{Deserialize, Serialize};

/// Default minimum length of an accepted answer, in characters.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Default oracle language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Base word used when the word source yields nothing.
pub const DEFAULT_FALLBACK_WORD: &str = "silkworm";

/// Key under which session state is persisted.
pub const DEFAULT_STATE_KEY: &str = "GameState";

/// Complete engine configuration.
///
/// Deserializes from partial JSON: missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Answers shorter than this are never real words.
    pub min_word_length: usize,

    /// Language tag handed to the dictionary oracle.
    pub language: String,

    /// Word used when the word bank would otherwise be empty.
    pub fallback_word: String,

    /// Fixed key for the persisted `SessionState`.
    pub state_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            language: DEFAULT_LANGUAGE.to_string(),
            fallback_word: DEFAULT_FALLBACK_WORD.to_string(),
            state_key: DEFAULT_STATE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum answer length.
    #[must_use]
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Set the oracle language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the fallback base word.
    ///
    /// Panics if the word is empty: a fallback must be playable.
    #[must_use]
    pub fn with_fallback_word(mut self, word: impl Into<String>) -> Self {
        let word = word.into();
        assert!(!word.is_empty(), "Fallback word must not be empty");
        self.fallback_word = word;
        self
    }

    /// Set the persistence key.
    #[must_use]
    pub fn with_state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = key.into();
        self
    }
}
