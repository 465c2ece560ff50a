//! Spell-check oracle contract.
//!
//! The engine never ships a dictionary. Hosts plug in whatever
//! spell-checker their platform provides by implementing `SpellOracle`.

/// A language-aware spelling oracle.
///
/// Implementations must be pure: the same word and language always give
/// the same answer, and asking has no side effects.
pub trait SpellOracle {
    /// Does `word` contain no misspelling in `language`?
    fn is_correctly_spelled(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellOracle for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_correctly_spelled(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Oracle that accepts every word. Useful for hosts without a dictionary.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl SpellOracle for AcceptAll {
    fn is_correctly_spelled(&self, _word: &str, _language: &str) -> bool {
        true
    }
}
