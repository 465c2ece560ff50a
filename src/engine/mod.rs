//! Game engine: round lifecycle, answer validation, outcomes.
//!
//! The engine calls into the word bank, dictionary, and persistence
//! layers but never renders anything. Presentation layers read
//! `current_word`/`used_words` and react to each `SubmitOutcome`.

mod game;
mod outcome;

pub use game::{GameEngine, GameEngineBuilder, RoundPhase};
pub use outcome::{OutcomeKind, SubmitOutcome};
