//! Reality check: minimum length plus oracle lookup.

use super::oracle::SpellOracle;
use crate::core::DEFAULT_LANGUAGE;

/// Answers "is this a real word?" for the engine.
///
/// Wraps an oracle and the language to ask it about. The length check is
/// applied first, so the oracle is never consulted for short words.
#[derive(Clone, Debug)]
pub struct DictionaryChecker<O> {
    oracle: O,
    language: String,
}

impl<O: SpellOracle> DictionaryChecker<O> {
    /// Create a checker for English.
    pub fn new(oracle: O) -> Self {
        Self::with_language(oracle, DEFAULT_LANGUAGE)
    }

    /// Create a checker for a specific language.
    pub fn with_language(oracle: O, language: impl Into<String>) -> Self {
        Self {
            oracle,
            language: language.into(),
        }
    }

    /// Language handed to the oracle.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The wrapped oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Is `word` at least `min_length` characters and correctly spelled?
    #[must_use]
    pub fn is_real_word(&self, word: &str, min_length: usize) -> bool {
        if word.chars().count() < min_length {
            return false;
        }
        self.oracle.is_correctly_spelled(word, &self.language)
    }
}
