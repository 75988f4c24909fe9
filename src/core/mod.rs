//! Core domain types for Word Weaver
//!
//! Words, letter sets and difficulty tiers. Everything here is pure and
//! independent of how puzzles are generated or scored.

mod difficulty;
mod letters;
mod word;

pub use difficulty::{DifficultyTier, RoundMode};
pub use letters::{CONSONANTS, LetterCounts, LetterSet, VOWELS, is_vowel};
pub use word::{Word, WordError};
