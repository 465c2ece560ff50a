//! Word-list oracle backed by in-memory sets.

use rustc_hash::{FxHashMap, FxHashSet};

use super::oracle::SpellOracle;

/// Oracle that knows exactly the words it was given, per language.
///
/// Lookups are case-insensitive. An unknown language knows no words.
///
/// ## Example
///
/// ```
/// use word_forge::dictionary::{SpellOracle, WordListOracle};
///
/// let oracle = WordListOracle::new().with_words("en", ["cart", "art"]);
///
/// assert!(oracle.is_correctly_spelled("Cart", "en"));
/// assert!(!oracle.is_correctly_spelled("cart", "fr"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordListOracle {
    languages: FxHashMap<String, FxHashSet<String>>,
}

impl WordListOracle {
    /// Create an oracle that knows no words.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words for a language.
    #[must_use]
    pub fn with_words<I, S>(mut self, language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_words(language, words);
        self
    }

    /// Add newline-delimited words for a language. Blank lines are skipped.
    #[must_use]
    pub fn with_text(mut self, language: &str, text: &str) -> Self {
        self.add_words(language, text.lines().map(str::trim).filter(|w| !w.is_empty()));
        self
    }

    /// Add words for a language.
    pub fn add_words<I, S>(&mut self, language: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.languages.entry(language.to_string()).or_default();
        set.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Number of words known for a language.
    #[must_use]
    pub fn word_count(&self, language: &str) -> usize {
        self.languages.get(language).map_or(0, |set| set.len())
    }
}

impl SpellOracle for WordListOracle {
    fn is_correctly_spelled(&self, word: &str, language: &str) -> bool {
        self.languages
            .get(language)
            .is_some_and(|set| set.contains(&word.to_lowercase()))
    }
}
