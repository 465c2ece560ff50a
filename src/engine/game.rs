//! The game engine: round lifecycle and answer validation.

use std::path::PathBuf;
use std::sync::Arc;

use im::Vector;

use super::outcome::SubmitOutcome;
use crate::core::{EngineConfig, GameRng, SessionState};
use crate::dictionary::{DictionaryChecker, SpellOracle};
use crate::persistence::{KeyValueStore, StatePersistence};
use crate::words::{is_possible, WordBank};

/// Where the engine is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// No base word yet. Only `new_round` and `resume` are valid.
    NoRound,
    /// A round was started and answers can be submitted.
    RoundActive,
}

/// Single-player word-derivation engine.
///
/// Owns the session state exclusively. Every mutation (`new_round`, an
/// accepted `submit`) is persisted immediately; a failed save is logged
/// and the in-memory change stands.
///
/// ## Example
///
/// ```
/// use word_forge::dictionary::WordListOracle;
/// use word_forge::engine::{GameEngineBuilder, SubmitOutcome};
/// use word_forge::persistence::MemoryStore;
/// use word_forge::words::WordBank;
///
/// let oracle = WordListOracle::new().with_words("en", ["cart", "art"]);
/// let mut engine = GameEngineBuilder::new()
///     .word_bank(WordBank::single("tractor"))
///     .seed(42)
///     .build(oracle, MemoryStore::new());
///
/// assert_eq!(engine.current_word(), "tractor");
/// assert!(engine.submit("Cart").is_accepted());
/// assert!(matches!(engine.submit("cart"), SubmitOutcome::AlreadyUsed { .. }));
/// ```
pub struct GameEngine<O, S> {
    config: EngineConfig,
    bank: Arc<WordBank>,
    dictionary: DictionaryChecker<O>,
    persistence: StatePersistence<S>,
    rng: GameRng,
    state: SessionState,
    phase: RoundPhase,
}

impl<O: SpellOracle, S: KeyValueStore> GameEngine<O, S> {
    /// Create an engine in the `NoRound` phase.
    ///
    /// Call [`resume`](Self::resume) or [`new_round`](Self::new_round)
    /// before submitting answers. `GameEngineBuilder::build` does this.
    pub fn new(config: EngineConfig, bank: Arc<WordBank>, oracle: O, store: S, rng: GameRng) -> Self {
        let dictionary = DictionaryChecker::with_language(oracle, config.language.clone());
        let persistence = StatePersistence::with_key(store, config.state_key.clone());

        Self {
            config,
            bank,
            dictionary,
            persistence,
            rng,
            state: SessionState::new(),
            phase: RoundPhase::NoRound,
        }
    }

    // === Lifecycle ===

    /// Current lifecycle phase.
    ///
    /// Set by `new_round` and `resume`, independent of the base word's
    /// contents.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Restore the saved round, or start a fresh one.
    ///
    /// Returns true if a saved round was restored. A saved state without
    /// a base word counts as no saved round.
    pub fn resume(&mut self) -> bool {
        match self.persistence.load() {
            Some(saved) if saved.has_round() => {
                tracing::info!(
                    word = %saved.current_word,
                    used = saved.used_words.len(),
                    "resumed saved round"
                );
                self.state = saved;
                self.phase = RoundPhase::RoundActive;
                true
            }
            _ => {
                self.new_round();
                false
            }
        }
    }

    /// Start a new round on a random base word.
    ///
    /// Clears the used words and persists. Valid in any phase.
    ///
    /// A blank bank entry still starts a round; every answer against it
    /// is `NotPossible`.
    pub fn new_round(&mut self) -> &str {
        let word = self.bank.random_word(&mut self.rng).to_string();
        self.state.reset(word);
        self.phase = RoundPhase::RoundActive;
        tracing::info!(word = %self.state.current_word, "new round");
        self.persist();
        &self.state.current_word
    }

    // === Play ===

    /// Validate an answer and record it if it passes.
    ///
    /// Checks run in order and stop at the first failure:
    /// possibility, originality, then the dictionary (the only slow one).
    ///
    /// Panics if no round has been started.
    pub fn submit(&mut self, raw_answer: &str) -> SubmitOutcome {
        assert!(
            self.phase == RoundPhase::RoundActive,
            "submit called before a round was started"
        );

        let answer = raw_answer.to_lowercase();

        let outcome = if !is_possible(&answer, &self.state.current_word) {
            SubmitOutcome::NotPossible {
                word: answer,
                base_word: self.state.current_word.clone(),
            }
        } else if self.state.is_used(&answer) {
            SubmitOutcome::AlreadyUsed { word: answer }
        } else if !self.dictionary.is_real_word(&answer, self.config.min_word_length) {
            SubmitOutcome::NotReal {
                word: answer,
                min_length: self.config.min_word_length,
            }
        } else {
            let index = self.state.record_word(answer.clone());
            self.persist();
            SubmitOutcome::Accepted { word: answer, index }
        };

        tracing::debug!(word = %outcome.word(), outcome = ?outcome.kind(), "answer submitted");
        outcome
    }

    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(&self.state) {
            tracing::warn!(key = %self.persistence.key(), error = %e, "failed to persist session state");
        }
    }

    // === Accessors ===

    /// Base word of the active round (empty before the first round).
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.state.current_word
    }

    /// Accepted answers, newest first.
    #[must_use]
    pub fn used_words(&self) -> &Vector<String> {
        &self.state.used_words
    }

    /// The full session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shared word bank.
    #[must_use]
    pub fn word_bank(&self) -> &Arc<WordBank> {
        &self.bank
    }

    pub fn dictionary(&self) -> &DictionaryChecker<O> {
        &self.dictionary
    }

    /// Persistence layer, including the injected store.
    pub fn persistence(&self) -> &StatePersistence<S> {
        &self.persistence
    }

    /// Mutable access to persistence, e.g. to clear a saved game.
    pub fn persistence_mut(&mut self) -> &mut StatePersistence<S> {
        &mut self.persistence
    }
}

/// Builder for a ready-to-play `GameEngine`.
///
/// `build` resumes the saved round or starts a new one, so the returned
/// engine is always in `RoundPhase::RoundActive`.
#[derive(Clone, Debug, Default)]
pub struct GameEngineBuilder {
    config: EngineConfig,
    bank: Option<Arc<WordBank>>,
    word_file: Option<PathBuf>,
    seed: Option<u64>,
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Word bank to draw base words from. Banks can be shared via `Arc`.
    pub fn word_bank(mut self, bank: impl Into<Arc<WordBank>>) -> Self {
        self.bank = Some(bank.into());
        self
    }

    /// Load base words from a newline-delimited file at build time.
    ///
    /// An empty or unreadable file falls back to the configured
    /// `fallback_word`. Ignored when `word_bank` is also set.
    pub fn word_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.word_file = Some(path.into());
        self
    }

    /// Fix the RNG seed for reproducible rounds.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build without resuming; the engine starts in `RoundPhase::NoRound`.
    pub fn build_idle<O: SpellOracle, S: KeyValueStore>(self, oracle: O, store: S) -> GameEngine<O, S> {
        let fallback = self.config.fallback_word.as_str();
        let bank = match (self.bank, self.word_file) {
            (Some(bank), _) => bank,
            (None, Some(path)) => Arc::new(WordBank::from_path_with_fallback(path, fallback)),
            (None, None) => Arc::new(WordBank::single(fallback)),
        };
        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        GameEngine::new(self.config, bank, oracle, store, rng)
    }

    /// Build the engine and resume or start a round.
    pub fn build<O: SpellOracle, S: KeyValueStore>(self, oracle: O, store: S) -> GameEngine<O, S> {
        let mut engine = self.build_idle(oracle, store);
        engine.resume();
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{AcceptAll, WordListOracle};
    use crate::engine::OutcomeKind;
    use crate::persistence::MemoryStore;

    fn tractor_engine() -> GameEngine<WordListOracle, MemoryStore> {
        let oracle = WordListOracle::new().with_words("en", ["cart", "art", "car", "tor", "to", "rot"]);
        GameEngineBuilder::new()
            .word_bank(WordBank::single("tractor"))
            .seed(42)
            .build(oracle, MemoryStore::new())
    }

    #[test]
    fn test_build_starts_round() {
        let engine = tractor_engine();

        assert_eq!(engine.phase(), RoundPhase::RoundActive);
        assert_eq!(engine.current_word(), "tractor");
        assert!(engine.used_words().is_empty());
    }

    #[test]
    fn test_build_idle_has_no_round() {
        let engine = GameEngineBuilder::new().seed(1).build_idle(AcceptAll, MemoryStore::new());

        assert_eq!(engine.phase(), RoundPhase::NoRound);
        assert_eq!(engine.current_word(), "");
    }

    #[test]
    #[should_panic(expected = "submit called before a round was started")]
    fn test_submit_without_round_panics() {
        let mut engine = GameEngineBuilder::new().seed(1).build_idle(AcceptAll, MemoryStore::new());
        engine.submit("cart");
    }

    #[test]
    fn test_blank_base_word_round_is_active() {
        let mut engine = GameEngineBuilder::new()
            .word_bank(WordBank::single(""))
            .seed(1)
            .build(AcceptAll, MemoryStore::new());

        assert_eq!(engine.phase(), RoundPhase::RoundActive);
        assert_eq!(engine.current_word(), "");
        assert_eq!(engine.submit("").kind(), OutcomeKind::NotPossible);
        assert_eq!(engine.submit("cart").kind(), OutcomeKind::NotPossible);
    }

    #[test]
    fn test_accepted_answer_is_lowercased() {
        let mut engine = tractor_engine();

        let outcome = engine.submit("CaRt");

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "cart".to_string(),
                index: 0
            }
        );
        assert_eq!(engine.used_words().front().map(String::as_str), Some("cart"));
    }

    #[test]
    fn test_check_order() {
        let mut engine = tractor_engine();

        // Impossible and unknown: possibility wins.
        assert_eq!(engine.submit("zebra").kind(), OutcomeKind::NotPossible);
        // The base word itself.
        assert_eq!(engine.submit("Tractor").kind(), OutcomeKind::NotPossible);
        // Possible but not in the dictionary.
        assert_eq!(engine.submit("tract").kind(), OutcomeKind::NotReal);

        assert!(engine.submit("rot").is_accepted());
        assert_eq!(engine.submit("ROT").kind(), OutcomeKind::AlreadyUsed);
    }

    #[test]
    fn test_not_possible_carries_base_word() {
        let mut engine = tractor_engine();

        match engine.submit("dog") {
            SubmitOutcome::NotPossible { word, base_word } => {
                assert_eq!(word, "dog");
                assert_eq!(base_word, "tractor");
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_min_length_from_config() {
        let oracle = WordListOracle::new().with_words("en", ["to", "tor"]);
        let mut engine = GameEngineBuilder::new()
            .config(EngineConfig::new().with_min_word_length(2))
            .word_bank(WordBank::single("tractor"))
            .seed(1)
            .build(oracle, MemoryStore::new());

        assert!(engine.submit("to").is_accepted());
    }

    #[test]
    fn test_new_round_persists() {
        let engine = tractor_engine();
        let saved = engine.persistence().load().unwrap();

        assert_eq!(&saved, engine.state());
    }

    #[test]
    fn test_language_from_config() {
        let oracle = WordListOracle::new().with_words("de", ["rot"]);
        let mut engine = GameEngineBuilder::new()
            .config(EngineConfig::new().with_language("de"))
            .word_bank(WordBank::single("tractor"))
            .seed(1)
            .build(oracle, MemoryStore::new());

        assert_eq!(engine.dictionary().language(), "de");
        assert!(engine.submit("rot").is_accepted());
    }

    #[test]
    fn test_default_bank_uses_configured_fallback() {
        let engine = GameEngineBuilder::new()
            .config(EngineConfig::new().with_fallback_word("elephant"))
            .seed(3)
            .build(AcceptAll, MemoryStore::new());

        assert_eq!(engine.current_word(), "elephant");
    }
}
