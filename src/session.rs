//! Round state
//!
//! [`GameSession`] owns everything that changes during a round: accepted
//! guesses, score, hint usage and the clock. The evaluator, hint generator and
//! settlement functions stay pure; the session feeds them its state and
//! records what they decide.

use crate::adaptive::{GuessRecord, PerformanceWindow};
use crate::core::Word;
use crate::generator::Puzzle;
use crate::hints::{Hint, HintKind, NoMoreHints, generate_hint};
use crate::scoring::{
    Outcome, RoundSummary, ScoringParams, evaluate, normalize_guess, settle_round,
};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Round length of a regular round
pub const REGULAR_ROUND: Duration = Duration::from_secs(60);

/// Round length of a daily round
pub const DAILY_ROUND: Duration = Duration::from_secs(120);

/// Per-round limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub round_duration: Duration,
    pub hint_budget: u32,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(round_duration: Duration, hint_budget: u32) -> Self {
        Self {
            round_duration,
            hint_budget,
        }
    }

    /// Limits for a puzzle: 60s regular or 120s daily, hints by difficulty
    #[must_use]
    pub const fn for_puzzle(puzzle: &Puzzle) -> Self {
        let round_duration = if puzzle.mode.is_daily() {
            DAILY_ROUND
        } else {
            REGULAR_ROUND
        };
        Self::new(round_duration, puzzle.difficulty.hint_budget())
    }
}

/// A hint together with the word it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GivenHint {
    pub word: Word,
    pub hint: Hint,
}

/// State of one round in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: Puzzle,
    params: ScoringParams,
    config: SessionConfig,
    display_letters: Vec<u8>,
    guessed: FxHashSet<String>,
    found: Vec<Word>,
    score: u32,
    hints: FxHashMap<Word, Vec<HintKind>>,
    hints_used: u32,
    started: Instant,
    last_guess: Instant,
    performance: PerformanceWindow,
}

impl GameSession {
    /// Start a round now
    #[must_use]
    pub fn new(puzzle: Puzzle, params: ScoringParams, config: SessionConfig) -> Self {
        Self::start_at(puzzle, params, config, Instant::now())
    }

    /// Start a round at a given instant
    #[must_use]
    pub fn start_at(
        puzzle: Puzzle,
        params: ScoringParams,
        config: SessionConfig,
        now: Instant,
    ) -> Self {
        let display_letters = puzzle.letters.letters().to_vec();
        Self {
            puzzle,
            params,
            config,
            display_letters,
            guessed: FxHashSet::default(),
            found: Vec::new(),
            score: 0,
            hints: FxHashMap::default(),
            hints_used: 0,
            started: now,
            last_guess: now,
            performance: PerformanceWindow::default(),
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn params(&self) -> &ScoringParams {
        &self.params
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Running word score, before settlement
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Target words found so far, in the order they were found
    #[must_use]
    pub fn found(&self) -> &[Word] {
        &self.found
    }

    #[must_use]
    pub fn is_found(&self, word: &Word) -> bool {
        self.guessed.contains(word.text())
    }

    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> u32 {
        self.config.hint_budget.saturating_sub(self.hints_used)
    }

    /// Hints given so far for `word`
    #[must_use]
    pub fn hints_for(&self, word: &Word) -> &[HintKind] {
        self.hints.get(word).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub const fn performance(&self) -> &PerformanceWindow {
        &self.performance
    }

    /// Letters in their current display order
    #[must_use]
    pub fn display_letters(&self) -> &[u8] {
        &self.display_letters
    }

    /// Shuffle the display order; the puzzle's letter set is unchanged
    pub fn shuffle_letters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.display_letters.shuffle(rng);
    }

    /// Submit a guess now
    pub fn submit(&mut self, guess: &str) -> Outcome {
        self.submit_at(guess, Instant::now())
    }

    /// Submit a guess at a given instant
    ///
    /// Correct guesses are recorded and added to the score. Guesses after the
    /// clock has run out are still evaluated but never recorded.
    pub fn submit_at(&mut self, guess: &str, now: Instant) -> Outcome {
        let outcome = evaluate(
            guess,
            self.puzzle.words.as_slice(),
            &self.guessed,
            self.puzzle.mode,
            &self.params,
        );
        if self.is_over_at(now) {
            return outcome;
        }

        let guess = normalize_guess(guess);
        let time_spent = now.saturating_duration_since(self.last_guess);
        match outcome {
            Outcome::Correct { score } => {
                self.score = self.score.saturating_add(score);
                if let Some(word) = self.puzzle.words.get(&guess) {
                    self.found.push(word.clone());
                }
                self.performance.push(GuessRecord {
                    success: true,
                    time_spent,
                    word_len: guess.len(),
                });
                self.guessed.insert(guess);
                self.last_guess = now;
            }
            Outcome::Invalid => {
                self.performance.push(GuessRecord {
                    success: false,
                    time_spent,
                    word_len: guess.len(),
                });
            }
            Outcome::AlreadyGuessed => {}
        }
        outcome
    }

    /// Ask for a hint about a random unfound word
    ///
    /// Only words that still have unused hint kinds are considered.
    ///
    /// # Errors
    ///
    /// Returns [`NoMoreHints::BudgetExhausted`] when the round's hint budget is
    /// spent and [`NoMoreHints::KindsExhausted`] when no unfound word has a
    /// hint left to give.
    pub fn request_hint<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<GivenHint, NoMoreHints> {
        let remaining = self.hints_remaining();
        if remaining == 0 {
            return Err(NoMoreHints::BudgetExhausted);
        }

        let candidates: Vec<&Word> = self
            .puzzle
            .words
            .iter()
            .filter(|word| !self.is_found(word))
            .filter(|word| self.hints_for(word).len() < HintKind::ALL.len())
            .collect();
        let word = (*candidates.choose(rng).ok_or(NoMoreHints::KindsExhausted)?).clone();

        let hint = generate_hint(&word, self.hints_for(&word), remaining, rng)?;
        self.hints.entry(word.clone()).or_default().push(hint.kind);
        self.hints_used += 1;
        Ok(GivenHint { word, hint })
    }

    /// Time left on the clock at `now`
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.config
            .round_duration
            .saturating_sub(now.saturating_duration_since(self.started))
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    /// Every target word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.puzzle.words.len()
    }

    /// The round ends when all words are found or the clock runs out
    #[must_use]
    pub fn is_over_at(&self, now: Instant) -> bool {
        self.is_complete() || self.remaining_at(now).is_zero()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over_at(Instant::now())
    }

    /// Settle the round at `now`
    #[must_use]
    pub fn finish_at(&self, now: Instant) -> RoundSummary {
        settle_round(self.score, self.remaining_at(now), self.hints_used, &self.params)
    }

    #[must_use]
    pub fn finish(&self) -> RoundSummary {
        self.finish_at(Instant::now())
    }

    /// Settle a round the player gave up on; unused time earns no bonus
    #[must_use]
    pub fn forfeit(&self) -> RoundSummary {
        settle_round(self.score, Duration::ZERO, self.hints_used, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundMode;
    use crate::generator::{daily_book_entry, fallback_puzzle};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(now: Instant) -> GameSession {
        let puzzle = fallback_puzzle();
        let config = SessionConfig::for_puzzle(&puzzle);
        GameSession::start_at(puzzle, ScoringParams::default(), config, now)
    }

    #[test]
    fn config_for_puzzle() {
        let regular = SessionConfig::for_puzzle(&fallback_puzzle());
        assert_eq!(regular.round_duration, Duration::from_secs(60));
        assert_eq!(regular.hint_budget, 2);

        let daily = SessionConfig::for_puzzle(&daily_book_entry(0));
        assert_eq!(daily.round_duration, Duration::from_secs(120));
    }

    #[test]
    fn full_round() {
        let start = Instant::now();
        let mut game = session(start);
        let at = |secs| start + Duration::from_secs(secs);

        assert_eq!(game.submit_at("word", at(2)), Outcome::Correct { score: 4 });
        assert_eq!(game.submit_at("WORD", at(3)), Outcome::AlreadyGuessed);
        assert_eq!(game.submit_at("ZORK", at(4)), Outcome::Invalid);
        assert_eq!(game.submit_at("SCORE", at(5)), Outcome::Correct { score: 5 });
        assert_eq!(game.score(), 9);
        assert!(!game.is_over_at(at(6)));

        game.submit_at("CAPE", at(7));
        game.submit_at("PACE", at(8));
        assert!(game.is_complete());
        assert!(game.is_over_at(at(8)));

        let summary = game.finish_at(at(10));
        assert_eq!(summary.word_score, 17);
        assert_eq!(summary.time_bonus, 50);
        assert_eq!(summary.final_score, 67);
        assert_eq!(
            game.found().iter().map(Word::text).collect::<Vec<_>>(),
            ["WORD", "SCORE", "CAPE", "PACE"]
        );
    }

    #[test]
    fn guesses_after_timeout_are_not_recorded() {
        let start = Instant::now();
        let mut game = session(start);
        let late = start + Duration::from_secs(61);

        assert!(game.is_over_at(late));
        assert_eq!(game.submit_at("WORD", late), Outcome::Correct { score: 4 });
        assert_eq!(game.score(), 0);
        assert!(game.found().is_empty());
        assert_eq!(game.finish_at(late).final_score, 0);
    }

    #[test]
    fn daily_rounds_double_length_scores() {
        let start = Instant::now();
        let puzzle = daily_book_entry(0);
        assert_eq!(puzzle.mode, RoundMode::Daily);
        let config = SessionConfig::for_puzzle(&puzzle);
        let mut game = GameSession::start_at(puzzle, ScoringParams::default(), config, start);

        assert_eq!(
            game.submit_at("CAPE", start + Duration::from_secs(1)),
            Outcome::Correct { score: 8 }
        );
    }

    #[test]
    fn hints_respect_budget_and_skip_found_words() {
        let start = Instant::now();
        let mut game = session(start);
        let mut rng = StdRng::seed_from_u64(3);

        for word in ["WORD", "SCORE", "CAPE"] {
            game.submit_at(word, start + Duration::from_secs(1));
        }

        let first = game.request_hint(&mut rng).unwrap();
        let second = game.request_hint(&mut rng).unwrap();
        assert_eq!(first.word.text(), "PACE");
        assert_eq!(second.word.text(), "PACE");
        assert_ne!(first.hint.kind, second.hint.kind);
        assert_eq!(game.hints_used(), 2);
        assert_eq!(game.hints_remaining(), 0);
        assert_eq!(game.request_hint(&mut rng), Err(NoMoreHints::BudgetExhausted));

        let summary = game.finish_at(start + Duration::from_secs(60));
        assert_eq!(summary.hint_penalty, 50);
        assert_eq!(summary.word_score, 13);
        assert_eq!(summary.final_score, 0);
    }

    #[test]
    fn hints_run_out_of_kinds() {
        let start = Instant::now();
        let puzzle = fallback_puzzle();
        let config = SessionConfig::new(Duration::from_secs(60), 100);
        let mut game = GameSession::start_at(puzzle, ScoringParams::default(), config, start);
        let mut rng = StdRng::seed_from_u64(8);

        for word in ["WORD", "SCORE", "CAPE"] {
            game.submit_at(word, start);
        }
        for _ in 0..HintKind::ALL.len() {
            game.request_hint(&mut rng).unwrap();
        }
        assert_eq!(game.request_hint(&mut rng), Err(NoMoreHints::KindsExhausted));
        assert_eq!(game.hints_used(), 6);
    }

    #[test]
    fn shuffle_keeps_letters() {
        let mut game = session(Instant::now());
        let mut rng = StdRng::seed_from_u64(2);
        game.shuffle_letters(&mut rng);

        let mut shuffled = game.display_letters().to_vec();
        let mut original = game.puzzle().letters.letters().to_vec();
        shuffled.sort_unstable();
        original.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn performance_tracks_guesses() {
        let start = Instant::now();
        let mut game = session(start);
        game.submit_at("WORD", start + Duration::from_secs(2));
        game.submit_at("NOPE", start + Duration::from_secs(3));
        game.submit_at("WORD", start + Duration::from_secs(4));

        assert_eq!(game.performance().len(), 2);
        assert!((game.performance().accuracy() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn forfeit_earns_no_time_bonus() {
        let start = Instant::now();
        let mut game = session(start);
        game.submit_at("CAPE", start + Duration::from_secs(1));

        let summary = game.forfeit();
        assert_eq!(summary.word_score, 4);
        assert_eq!(summary.time_bonus, 0);
        assert_eq!(summary.final_score, 4);
        assert!(game.finish_at(start + Duration::from_secs(2)).time_bonus > 0);
    }
}
