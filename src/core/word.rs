//! Word representation
//!
//! A Word is a validated, uppercase ASCII string. Target words, guesses that
//! made it into a round and dictionary entries all use this type.

use super::letters::{LetterCounts, is_vowel};
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// An uppercase word made only of the letters A-Z
///
/// Input is trimmed and uppercased on construction, so `"cape"` and `" CAPE "`
/// produce the same word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::Word;
    ///
    /// let word = Word::new("cape").unwrap();
    /// assert_eq!(word.text(), "CAPE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4pe").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Wrap text that is already known to be uppercase A-Z
    pub(crate) fn from_trusted(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(
            !text.is_empty() && text.bytes().all(|b| b.is_ascii_uppercase()),
            "trusted word must be non-empty uppercase ASCII: {text:?}"
        );
        Self { text }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false` for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn first_letter(&self) -> char {
        char::from(self.as_bytes()[0])
    }

    #[must_use]
    pub fn last_letter(&self) -> char {
        char::from(self.as_bytes()[self.len() - 1])
    }

    /// Letter at index `len / 2`
    #[must_use]
    pub fn middle_letter(&self) -> char {
        char::from(self.as_bytes()[self.len() / 2])
    }

    /// Count of A, E, I, O and U in the word
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.as_bytes().iter().filter(|&&b| is_vowel(b)).count()
    }

    /// Check whether any letter appears more than once
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.letter_counts().max() > 1
    }

    /// Multiset of letters in the word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_letters(self.as_bytes())
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
