//! Session state: the base word and the words accepted against it.
//!
//! `SessionState` is the only mutable game data. It is owned by a single
//! `GameEngine` and is the unit of persistence: it serializes to
//!
//! ```text
//! {"currentWord": "tractor", "usedWords": ["cart", "art"]}
//! ```
//!
//! `used_words` is an `im::Vector`, so pushing to the front is cheap and
//! presentation layers can clone a snapshot in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

/// Per-round game data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Base word for the active round. Empty until a round starts.
    ///
    /// Keeps its original casing for display; comparisons lowercase it.
    pub current_word: String,

    /// Accepted answers, newest first.
    pub used_words: Vector<String>,
}

impl SessionState {
    /// Create an empty state (no round started).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the state for a fresh round on `word`.
    #[must_use]
    pub fn for_word(word: impl Into<String>) -> Self {
        Self {
            current_word: word.into(),
            used_words: Vector::new(),
        }
    }

    /// Has a round been started?
    #[must_use]
    pub fn has_round(&self) -> bool {
        !self.current_word.is_empty()
    }

    /// Lowercased base word, used for every comparison.
    #[must_use]
    pub fn normalized_word(&self) -> String {
        self.current_word.to_lowercase()
    }

    /// Case-insensitive membership test against `used_words`.
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        let needle = word.to_lowercase();
        self.used_words.iter().any(|w| w.to_lowercase() == needle)
    }

    /// Record an accepted word at the front of the list.
    ///
    /// Returns the index it landed at (always 0).
    pub fn record_word(&mut self, word: impl Into<String>) -> usize {
        self.used_words.push_front(word.into());
        0
    }

    /// Replace the whole state with a fresh round on `word`.
    pub fn reset(&mut self, word: impl Into<String>) {
        self.current_word = word.into();
        self.used_words.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_no_round() {
        let state = SessionState::new();

        assert!(!state.has_round());
        assert!(state.used_words.is_empty());
    }

    #[test]
    fn test_record_word_newest_first() {
        let mut state = SessionState::for_word("tractor");

        assert_eq!(state.record_word("art"), 0);
        assert_eq!(state.record_word("car"), 0);

        let words: Vec<_> = state.used_words.iter().cloned().collect();
        assert_eq!(words, vec!["car", "art"]);
    }

    #[test]
    fn test_is_used_ignores_case() {
        let mut state = SessionState::for_word("tractor");
        state.record_word("Cart");

        assert!(state.is_used("cart"));
        assert!(state.is_used("CART"));
        assert!(!state.is_used("art"));
    }

    #[test]
    fn test_reset_clears_words() {
        let mut state = SessionState::for_word("tractor");
        state.record_word("cart");

        state.reset("silkworm");

        assert_eq!(state.current_word, "silkworm");
        assert!(state.used_words.is_empty());
    }

    #[test]
    fn test_normalized_word_keeps_display_casing() {
        let state = SessionState::for_word("Tractor");

        assert_eq!(state.current_word, "Tractor");
        assert_eq!(state.normalized_word(), "tractor");
    }

    #[test]
    fn test_json_field_names() {
        let mut state = SessionState::for_word("tractor");
        state.record_word("art");
        state.record_word("cart");

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"currentWord":"tractor","usedWords":["cart","art"]}"#);

        let restored: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
