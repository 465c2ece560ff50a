//! Deterministic random number generation for base-word selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Entropy-seeded**: Production engines draw a fresh seed per process
//!
//! ```
//! use word_forge::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut other = GameRng::new(42);
//!
//! assert_eq!(rng.gen_range_usize(0..100), other.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to pick base words.
///
/// Uses ChaCha8 for speed while keeping good statistical quality, so
/// `WordBank::random_word` stays uniform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
