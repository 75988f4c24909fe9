//! Guess evaluation and scoring
//!
//! [`evaluate`] classifies a single guess against the round state and values
//! correct words. [`settle_round`] applies the round-end time bonus and hint
//! penalty.

mod evaluator;
mod params;
mod settlement;

pub use evaluator::{Outcome, evaluate, normalize_guess};
pub use params::{LETTER_POINTS, ScoringParams, ScoringRule};
pub use settlement::{RoundSummary, settle_round};
