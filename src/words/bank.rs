//! Pool of candidate base words.
//!
//! A `WordBank` is loaded once and never changes, so it can be shared
//! between engines behind an `Arc`. It is never empty: an empty source
//! degrades to a single fallback word.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::{GameRng, WordSourceError, DEFAULT_FALLBACK_WORD};

/// Immutable, non-empty list of base words.
///
/// ## Example
///
/// ```
/// use word_forge::core::GameRng;
/// use word_forge::words::WordBank;
///
/// let bank = WordBank::from_text("tractor\nsilkworm");
/// let mut rng = GameRng::new(7);
///
/// assert!(bank.contains(bank.random_word(&mut rng)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Load from a sequence of lines, falling back to `silkworm`.
    ///
    /// Lines are kept as given, blank ones included.
    pub fn load<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_fallback(lines, DEFAULT_FALLBACK_WORD)
    }

    /// Load from a sequence of lines with a caller-chosen fallback word.
    pub fn with_fallback<I, S>(lines: I, fallback: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = lines.into_iter().map(Into::into).collect();
        if words.is_empty() {
            words.push(fallback.to_string());
        }
        Self { words }
    }

    /// Bank containing only `word`.
    #[must_use]
    pub fn single(word: impl Into<String>) -> Self {
        Self {
            words: vec![word.into()],
        }
    }

    /// Split newline-delimited text into a bank.
    ///
    /// Splits on `\n` and `\r\n`. Interior blank lines become entries;
    /// a trailing newline does not add one.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::load(text.lines())
    }

    /// Like [`from_text`](Self::from_text), with a custom fallback.
    #[must_use]
    pub fn from_text_with_fallback(text: &str, fallback: &str) -> Self {
        Self::with_fallback(text.lines(), fallback)
    }

    /// Read a bank from any reader.
    pub fn try_from_reader(reader: impl Read) -> Result<Self, WordSourceError> {
        Ok(Self::from_text(&read_text(reader)?))
    }

    /// Read a bank from a file.
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        Ok(Self::from_text(&read_file(path.as_ref())?))
    }

    /// Read a bank from any reader, falling back to `silkworm` on failure.
    pub fn from_reader(reader: impl Read) -> Self {
        Self::from_reader_with_fallback(reader, DEFAULT_FALLBACK_WORD)
    }

    /// Read a bank from any reader. An empty or unreadable source yields
    /// a bank holding only `fallback`.
    pub fn from_reader_with_fallback(reader: impl Read, fallback: &str) -> Self {
        Self::recover(read_text(reader), fallback)
    }

    /// Read a bank from a file, falling back to `silkworm` on failure.
    ///
    /// A missing or unreadable file is not an error for the game: the
    /// round simply uses the fallback word.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::from_path_with_fallback(path, DEFAULT_FALLBACK_WORD)
    }

    /// Read a bank from a file. An empty or unreadable file yields a bank
    /// holding only `fallback`.
    pub fn from_path_with_fallback(path: impl AsRef<Path>, fallback: &str) -> Self {
        Self::recover(read_file(path.as_ref()), fallback)
    }

    fn recover(text: Result<String, WordSourceError>, fallback: &str) -> Self {
        match text {
            Ok(text) => Self::from_text_with_fallback(&text, fallback),
            Err(e) => {
                tracing::warn!(error = %e, %fallback, "word source unreadable, using fallback word");
                Self::single(fallback)
            }
        }
    }

    /// Pick a uniformly random word.
    pub fn random_word(&self, rng: &mut GameRng) -> &str {
        // Non-empty by construction, so the range is never empty.
        let index = rng.gen_range_usize(0..self.words.len());
        &self.words[index]
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is `word` in the bank (exact match)?
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Iterate over the words in source order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn read_text(mut reader: impl Read) -> Result<String, WordSourceError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

fn read_file(path: &Path) -> Result<String, WordSourceError> {
    fs::read_to_string(path).map_err(|source| WordSourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Default for WordBank {
    fn default() -> Self {
        Self::single(DEFAULT_FALLBACK_WORD)
    }
}
