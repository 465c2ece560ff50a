//! Submission outcomes.
//!
//! Rejections are ordinary values, not errors: they are expected, frequent,
//! and fixable by the player. Each variant carries what a presentation
//! layer needs to show its message without asking the engine again.

use serde::{Deserialize, Serialize};

/// Result of submitting an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SubmitOutcome {
    /// The answer was recorded at `index` of the used-word list.
    Accepted { word: String, index: usize },

    /// The answer cannot be spelled from `base_word`, or is `base_word`.
    NotPossible { word: String, base_word: String },

    /// The answer was already accepted this round.
    AlreadyUsed { word: String },

    /// Too short, or unknown to the dictionary.
    NotReal { word: String, min_length: usize },
}

/// Discriminant of a `SubmitOutcome`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Accepted,
    NotPossible,
    AlreadyUsed,
    NotReal,
}

impl SubmitOutcome {
    /// The normalized answer this outcome is about.
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            SubmitOutcome::Accepted { word, .. }
            | SubmitOutcome::NotPossible { word, .. }
            | SubmitOutcome::AlreadyUsed { word }
            | SubmitOutcome::NotReal { word, .. } => word,
        }
    }

    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        match self {
            SubmitOutcome::Accepted { .. } => OutcomeKind::Accepted,
            SubmitOutcome::NotPossible { .. } => OutcomeKind::NotPossible,
            SubmitOutcome::AlreadyUsed { .. } => OutcomeKind::AlreadyUsed,
            SubmitOutcome::NotReal { .. } => OutcomeKind::NotReal,
        }
    }

    /// Was the answer recorded?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}
