//! Word sources and letter arithmetic.
//!
//! - `WordBank`: the immutable pool base words are drawn from
//! - `LetterPool` / `is_possible`: the derivation test for answers

pub mod bank;
pub mod letters;

pub use bank::WordBank;
pub use letters::{is_possible, LetterPool};
