//! Letter-tile arithmetic.
//!
//! An answer is derivable from a base word when every letter of the answer
//! can be taken from the base word, each base letter at most once. This is
//! a sub-multiset test, not substring containment: "cart" is derivable
//! from "tractor", "toot" is not (only one 'o').

use smallvec::SmallVec;

/// Mutable bag of letter tiles taken from a base word.
///
/// Most base words fit inline, so no allocation happens per check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterPool {
    letters: SmallVec<[char; 16]>,
}

impl LetterPool {
    /// Build a pool from the lowercased letters of `word`.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.to_lowercase().chars().collect(),
        }
    }

    /// Number of tiles left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.letters.len()
    }

    /// Consume one tile matching `letter`.
    ///
    /// Returns false if no such tile is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Consume tiles for every letter of `word`, stopping at the first miss.
    ///
    /// `word` is compared as given; callers lowercase it first.
    pub fn spell(&mut self, word: &str) -> bool {
        word.chars().all(|c| self.take(c))
    }
}

/// Can `answer` be spelled from the letters of `base`, without being `base`?
///
/// Both sides are compared case-insensitively.
#[must_use]
pub fn is_possible(answer: &str, base: &str) -> bool {
    let answer = answer.to_lowercase();
    let base = base.to_lowercase();

    if answer == base {
        return false;
    }

    LetterPool::new(&base).spell(&answer)
}
