//! Word Weaver
//!
//! Word puzzles built from a handful of letters: generate a letter set and the
//! hidden words it spells, check guesses, hand out hints and score a timed
//! round.
//!
//! # Quick Start
//!
//! ```rust
//! use word_weaver::generator::fallback_puzzle;
//! use word_weaver::scoring::{Outcome, ScoringParams};
//! use word_weaver::session::{GameSession, SessionConfig};
//!
//! let puzzle = fallback_puzzle();
//! let config = SessionConfig::for_puzzle(&puzzle);
//! let mut session = GameSession::new(puzzle, ScoringParams::default(), config);
//!
//! assert_eq!(session.submit("word"), Outcome::Correct { score: 4 });
//! assert_eq!(session.submit("word"), Outcome::AlreadyGuessed);
//! assert_eq!(session.submit("zork"), Outcome::Invalid);
//! ```

// Core domain types
pub mod core;

// Word validity oracles
pub mod dictionary;

// Letter sets, target words and the daily challenge
pub mod generator;

// Guess evaluation and round settlement
pub mod scoring;

pub mod hints;

pub mod adaptive;

// Round state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
