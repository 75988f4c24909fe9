//! In-memory dictionary

use super::embedded::DICTIONARY;
use super::{DictionaryOracle, OracleError};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of valid uppercase words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary backed by the word list embedded at build time
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY.iter().copied())
    }

    /// Build a dictionary from arbitrary strings, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use word_weaver::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cape", "pace", "not a word!"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("CAPE"));
    /// assert!(dictionary.contains("pace"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| Word::new(w.as_ref()).ok())
            .collect();
        Self { words }
    }

    /// Add a word; returns `false` if it was invalid or already present
    pub fn insert(&mut self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.words.insert(w))
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().all(|b| b.is_ascii_uppercase()) {
            self.words.contains(word)
        } else {
            self.words.contains(word.trim().to_ascii_uppercase().as_str())
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl DictionaryOracle for Dictionary {
    fn is_valid_word(&self, word: &str) -> Result<bool, OracleError> {
        Ok(self.contains(word))
    }
}
