//! Puzzle types

use crate::core::{DifficultyTier, LetterSet, RoundMode, Word};
use std::fmt;

/// Target words of a round, unique and in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Append a word; returns `false` if it was already present
    pub fn insert(&mut self, word: Word) -> bool {
        if self.words.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.text() == word)
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word);
        }
        list
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// How a puzzle came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleOrigin {
    /// Synthesized with the requested constraints
    Generated,
    /// Synthesized after lowering the target word count
    Relaxed,
    /// The static default puzzle
    Fallback,
    /// An entry of the curated daily puzzle book
    DailyBook,
}

impl PuzzleOrigin {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Relaxed => "relaxed",
            Self::Fallback => "fallback",
            Self::DailyBook => "daily book",
        }
    }
}

/// Letters and target words for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub letters: LetterSet,
    pub words: WordList,
    pub difficulty: DifficultyTier,
    pub mode: RoundMode,
    pub origin: PuzzleOrigin,
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.letters)?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{word}")?;
        }
        f.write_str("]")
    }
}

/// Letters of the static default puzzle
pub const FALLBACK_LETTERS: &str = "WORDSCAPE";

/// Target words of the static default puzzle
pub const FALLBACK_WORDS: [&str; 4] = ["WORD", "SCORE", "CAPE", "PACE"];

/// The static puzzle used when generation cannot produce one
///
/// # Examples
/// ```
/// use word_weaver::generator::{PuzzleOrigin, fallback_puzzle};
///
/// let puzzle = fallback_puzzle();
/// assert_eq!(puzzle.letters.to_string(), "WORDSCAPE");
/// assert_eq!(puzzle.words.len(), 4);
/// assert_eq!(puzzle.origin, PuzzleOrigin::Fallback);
/// ```
#[must_use]
pub fn fallback_puzzle() -> Puzzle {
    book_puzzle(
        FALLBACK_LETTERS,
        &FALLBACK_WORDS,
        DifficultyTier::Medium,
        RoundMode::Regular,
        PuzzleOrigin::Fallback,
    )
}

/// Build a puzzle from static, known-good text
pub(crate) fn book_puzzle(
    letters: &str,
    words: &[&str],
    difficulty: DifficultyTier,
    mode: RoundMode,
    origin: PuzzleOrigin,
) -> Puzzle {
    Puzzle {
        letters: LetterSet::from_raw(letters.as_bytes().to_vec()),
        words: words.iter().map(|&w| Word::from_trusted(w)).collect(),
        difficulty,
        mode,
        origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_keeps_insertion_order_and_uniqueness() {
        let mut list = WordList::new();
        assert!(list.insert(Word::new("pace").unwrap()));
        assert!(list.insert(Word::new("cape").unwrap()));
        assert!(!list.insert(Word::new("PACE").unwrap()));

        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, ["PACE", "CAPE"]);
        assert!(list.contains("CAPE"));
        assert!(!list.contains("cape"));
        assert_eq!(list.get("PACE").map(Word::len), Some(4));
    }

    #[test]
    fn fallback_words_are_spellable() {
        let puzzle = fallback_puzzle();
        for word in &puzzle.words {
            assert!(puzzle.letters.can_spell(word), "{word}");
        }
        assert!(puzzle.letters.vowel_count() >= 2);
        assert_eq!(puzzle.words.len(), 4);
    }

    #[test]
    fn puzzle_display() {
        assert_eq!(
            fallback_puzzle().to_string(),
            "WORDSCAPE [WORD, SCORE, CAPE, PACE]"
        );
    }
}
