//! Dictionary lookups.
//!
//! The engine treats the dictionary as an external oracle:
//! - `SpellOracle`: the host-supplied spelling predicate
//! - `DictionaryChecker`: minimum length + oracle, as the engine uses it
//! - `WordListOracle`: a set-backed oracle for tests and simple hosts

pub mod checker;
pub mod oracle;
pub mod word_list;

pub use checker::DictionaryChecker;
pub use oracle::{AcceptAll, SpellOracle};
pub use word_list::WordListOracle;
