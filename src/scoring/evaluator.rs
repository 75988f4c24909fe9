//! Guess evaluation

use super::ScoringParams;
use crate::core::{RoundMode, Word};
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Result of evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A target word not guessed before, worth `score` points
    Correct { score: u32 },
    /// Already accepted earlier in the round
    AlreadyGuessed,
    /// Not a target word of this puzzle
    Invalid,
}

impl Outcome {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// Points awarded, zero unless correct
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Correct { score } => score,
            Self::AlreadyGuessed | Self::Invalid => 0,
        }
    }
}

/// Canonical form of a guess: trimmed and uppercased
#[must_use]
pub fn normalize_guess(guess: &str) -> String {
    guess.trim().to_ascii_uppercase()
}

/// Classify a guess against the round state and score it
///
/// Already-guessed words are checked first, so a repeated target word is
/// never scored twice. This function is pure: the caller records accepted
/// guesses in its own state.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use word_weaver::core::RoundMode;
/// use word_weaver::generator::fallback_puzzle;
/// use word_weaver::scoring::{Outcome, ScoringParams, evaluate};
///
/// let puzzle = fallback_puzzle();
/// let params = ScoringParams::default();
/// let mut guessed = HashSet::new();
///
/// let outcome = evaluate("word", puzzle.words.as_slice(), &guessed, RoundMode::Regular, &params);
/// assert_eq!(outcome, Outcome::Correct { score: 4 });
///
/// guessed.insert("WORD".to_string());
/// let outcome = evaluate("WORD", puzzle.words.as_slice(), &guessed, RoundMode::Regular, &params);
/// assert_eq!(outcome, Outcome::AlreadyGuessed);
/// ```
pub fn evaluate<S: BuildHasher>(
    guess: &str,
    targets: &[Word],
    already_guessed: &HashSet<String, S>,
    mode: RoundMode,
    params: &ScoringParams,
) -> Outcome {
    let guess = normalize_guess(guess);

    if already_guessed.contains(&guess) {
        Outcome::AlreadyGuessed
    } else if targets.iter().any(|target| target.text() == guess) {
        Outcome::Correct {
            score: params.word_score(&guess, mode),
        }
    } else {
        Outcome::Invalid
    }
}
