//! Letter sets and letter multisets
//!
//! A round presents an ordered [`LetterSet`]. Words are checked against it as
//! multisets: a word can be spelled when no letter is needed more often than
//! the set provides it.

use super::word::{Word, WordError};
use std::fmt;

/// The five vowels
pub const VOWELS: &[u8] = b"AEIOU";

/// The 21 consonants (Y counts as a consonant)
pub const CONSONANTS: &[u8] = b"BCDFGHJKLMNPQRSTVWXYZ";

/// Check whether an uppercase letter is a vowel
#[inline]
#[must_use]
pub const fn is_vowel(letter: u8) -> bool {
    matches!(letter, b'A' | b'E' | b'I' | b'O' | b'U')
}

/// Count of each letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts([u8; 26]);

impl LetterCounts {
    /// Count uppercase letters, ignoring anything else
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut counts = [0u8; 26];
        for &letter in letters {
            if letter.is_ascii_uppercase() {
                let slot = &mut counts[usize::from(letter - b'A')];
                *slot = slot.saturating_add(1);
            }
        }
        Self(counts)
    }

    /// How many times `letter` occurs (0 for non-letters)
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> u8 {
        if letter.is_ascii_uppercase() {
            self.0[(letter - b'A') as usize]
        } else {
            0
        }
    }

    /// Check that every letter of `other` is available here often enough
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(have, need)| have >= need)
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    /// Highest count of any single letter
    #[must_use]
    pub fn max(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Ordered letters presented to the player for one round
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterSet {
    letters: Vec<u8>,
}

impl LetterSet {
    /// Build a letter set from text such as `"WORDSCAPE"`
    ///
    /// Lowercase input is uppercased; whitespace is not allowed.
    ///
    /// # Errors
    /// Returns `WordError` if any character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::{LetterSet, Word};
    ///
    /// let letters = LetterSet::parse("wordscape").unwrap();
    /// assert_eq!(letters.len(), 9);
    /// assert!(letters.can_spell(&Word::new("SCORE").unwrap()));
    /// assert!(!letters.can_spell(&Word::new("WOOD").unwrap()));
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: Vec<u8> = text.bytes().map(|b| b.to_ascii_uppercase()).collect();
        if !letters.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { letters })
    }

    /// Wrap letters that are already uppercase A-Z
    pub(crate) fn from_raw(letters: Vec<u8>) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.letters.iter().filter(|&&b| is_vowel(b)).count()
    }

    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        LetterCounts::from_letters(&self.letters)
    }

    /// Check whether `word` is a sub-multiset of this letter set
    #[must_use]
    pub fn can_spell(&self, word: &Word) -> bool {
        word.len() <= self.len() && self.counts().covers(&word.letter_counts())
    }

    /// Iterate the letters as chars
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| char::from(b))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
