//! Puzzle generation
//!
//! A round is a [`LetterSet`] plus the target words that can be spelled from
//! it. Letters are drawn with a guaranteed vowel minimum, then candidate words
//! are synthesized from the letters and checked against a
//! [`DictionaryOracle`]. Generation is bounded by an attempt budget; callers
//! that need a puzzle no matter what use [`generate_puzzle_or_fallback`].

mod daily;
mod letters;
mod puzzle;
mod words;

pub use daily::{
    DAILY_BOOK, DailyConfig, DailySeed, daily_book_entry, generate_daily_puzzle,
    time_until_next_daily, today_utc,
};
pub use letters::{DuplicatePolicy, VOWEL_REDRAW_PROBABILITY, generate_letters};
pub use puzzle::{
    FALLBACK_LETTERS, FALLBACK_WORDS, Puzzle, PuzzleOrigin, WordList, fallback_puzzle,
};
pub use words::{DEFAULT_MAX_ATTEMPTS, generate_words};

use crate::core::{DifficultyTier, LetterSet, RoundMode};
use crate::dictionary::DictionaryOracle;
use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

/// Word synthesis ran out of attempts before finding enough words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "found {found} of {target} words after {attempts} attempts ({oracle_failures} oracle failures)"
)]
pub struct GenerationExhausted {
    pub attempts: usize,
    pub found: usize,
    pub target: usize,
    pub oracle_failures: usize,
}

/// Settings for regular puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub difficulty: DifficultyTier,

    /// Letters per set (default: 9)
    pub letter_count: usize,

    /// Guaranteed vowels per set (default: 2)
    pub vowel_minimum: usize,

    /// Target words per puzzle (default: depends on difficulty)
    pub target_count: usize,

    /// Candidates tried per letter set (default: 2000)
    pub max_attempts: usize,

    pub duplicates: DuplicatePolicy,

    /// Fresh letter sets tried at each target count before relaxing (default: 3)
    pub rerolls: usize,
}

impl GeneratorConfig {
    /// Default settings for a difficulty tier
    #[must_use]
    pub const fn new(difficulty: DifficultyTier) -> Self {
        Self {
            difficulty,
            letter_count: 9,
            vowel_minimum: 2,
            target_count: difficulty.default_target_count(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            duplicates: DuplicatePolicy::Allow,
            rerolls: 3,
        }
    }

    #[must_use]
    pub const fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DifficultyTier::default())
    }
}

/// Generate a regular puzzle: fresh letters, then target words
///
/// # Errors
///
/// Returns [`GenerationExhausted`] if word synthesis runs out of attempts.
///
/// # Examples
/// ```
/// use word_weaver::dictionary::Dictionary;
/// use word_weaver::generator::{GeneratorConfig, generate_puzzle};
///
/// let oracle = Dictionary::embedded();
/// let config = GeneratorConfig::default().with_target_count(1);
/// if let Ok(puzzle) = generate_puzzle(&config, &oracle, &mut rand::rng()) {
///     assert!(puzzle.words.iter().all(|w| puzzle.letters.can_spell(w)));
/// }
/// ```
pub fn generate_puzzle<O, R>(
    config: &GeneratorConfig,
    oracle: &O,
    rng: &mut R,
) -> Result<Puzzle, GenerationExhausted>
where
    O: DictionaryOracle + ?Sized,
    R: Rng + ?Sized,
{
    let letters: LetterSet = generate_letters(
        config.vowel_minimum,
        config.letter_count,
        config.duplicates,
        rng,
    );
    let words = generate_words(
        &letters,
        config.target_count,
        config.difficulty,
        oracle,
        config.max_attempts,
        rng,
    )?;

    Ok(Puzzle {
        letters,
        words,
        difficulty: config.difficulty,
        mode: RoundMode::Regular,
        origin: PuzzleOrigin::Generated,
    })
}

/// Generate a regular puzzle, relaxing constraints until one is found
///
/// Each target count gets [`GeneratorConfig::rerolls`] fresh letter sets.
/// When all of them fall short the target count is halved, down to one word.
/// If the tier cannot produce even a single word, the same steps are repeated
/// one tier easier; the returned puzzle carries the tier its words were
/// actually drawn for. Only when the easiest tier also comes up empty is the
/// static [`fallback_puzzle`] returned, so this never fails.
pub fn generate_puzzle_or_fallback<O, R>(
    config: &GeneratorConfig,
    oracle: &O,
    rng: &mut R,
) -> Puzzle
where
    O: DictionaryOracle + ?Sized,
    R: Rng + ?Sized,
{
    let mut attempt = *config;

    loop {
        if let Some(mut puzzle) = generate_with_smaller_targets(&attempt, oracle, rng) {
            if puzzle.difficulty != config.difficulty || puzzle.words.len() < config.target_count
            {
                puzzle.origin = PuzzleOrigin::Relaxed;
            }
            return puzzle;
        }

        let easier = attempt.difficulty.easier();
        if easier == attempt.difficulty {
            break;
        }
        debug!("No {} words found; stepping down to {easier}", attempt.difficulty);
        attempt.difficulty = easier;
    }

    warn!(
        "No {} puzzle could be generated; using the default puzzle",
        config.difficulty
    );
    fallback_puzzle()
}

/// Try `config`, halving the target count after every round of rerolls
fn generate_with_smaller_targets<O, R>(
    config: &GeneratorConfig,
    oracle: &O,
    rng: &mut R,
) -> Option<Puzzle>
where
    O: DictionaryOracle + ?Sized,
    R: Rng + ?Sized,
{
    let mut attempt = *config;

    loop {
        for _ in 0..config.rerolls.max(1) {
            match generate_puzzle(&attempt, oracle, rng) {
                Ok(puzzle) => return Some(puzzle),
                Err(err) => debug!(
                    "{} generation with target {}: {err}",
                    attempt.difficulty, attempt.target_count
                ),
            }
        }

        if attempt.target_count <= 1 {
            return None;
        }
        attempt.target_count /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, OracleError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Accepts every candidate
    struct AcceptAll;

    impl DictionaryOracle for AcceptAll {
        fn is_valid_word(&self, _word: &str) -> Result<bool, OracleError> {
            Ok(true)
        }
    }

    struct Offline;

    impl DictionaryOracle for Offline {
        fn is_valid_word(&self, _word: &str) -> Result<bool, OracleError> {
            Err(OracleError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.difficulty, DifficultyTier::Medium);
        assert_eq!(config.letter_count, 9);
        assert_eq!(config.vowel_minimum, 2);
        assert_eq!(config.target_count, 4);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.duplicates, DuplicatePolicy::Allow);

        assert_eq!(GeneratorConfig::new(DifficultyTier::Easy).target_count, 5);
        assert_eq!(GeneratorConfig::new(DifficultyTier::Hard).target_count, 3);
    }

    #[test]
    fn generated_puzzles_hold_invariants_for_every_tier() {
        for tier in DifficultyTier::ALL {
            let config = GeneratorConfig::new(tier);
            for seed in 0..100 {
                let mut rng = StdRng::seed_from_u64(seed);
                let puzzle = generate_puzzle(&config, &AcceptAll, &mut rng).unwrap();

                assert_eq!(puzzle.origin, PuzzleOrigin::Generated);
                assert_eq!(puzzle.letters.len(), 9);
                assert!(puzzle.letters.vowel_count() >= 2);
                assert_eq!(puzzle.words.len(), config.target_count);
                for word in &puzzle.words {
                    assert!(puzzle.letters.can_spell(word), "{tier} seed {seed}: {word}");
                    assert!(tier.allows_len(word.len()), "{tier} seed {seed}: {word}");
                }
            }
        }
    }

    #[test]
    fn generate_puzzle_reports_exhaustion() {
        let config = GeneratorConfig::default().with_max_attempts(10);
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_puzzle(&config, &Dictionary::new(), &mut rng).unwrap_err();
        assert_eq!(err.attempts, 10);
        assert_eq!(err.target, 4);
        assert!(err.to_string().contains("0 of 4 words"));
    }

    #[test]
    fn fallback_when_oracle_is_offline() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = GeneratorConfig::default().with_max_attempts(20);
        let puzzle = generate_puzzle_or_fallback(&config, &Offline, &mut rng);
        assert_eq!(puzzle, fallback_puzzle());
    }

    #[test]
    fn relaxes_target_count_before_falling_back() {
        // At most two words exist, so five can never be found
        let oracle = Dictionary::from_words(["TEA", "EAT"]);
        let config = GeneratorConfig::new(DifficultyTier::Easy).with_max_attempts(3_000);

        let mut relaxed = 0;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_puzzle_or_fallback(&config, &oracle, &mut rng);
            match puzzle.origin {
                PuzzleOrigin::Relaxed => {
                    relaxed += 1;
                    assert!(puzzle.words.len() < config.target_count);
                    assert!(!puzzle.words.is_empty());
                }
                PuzzleOrigin::Fallback => assert_eq!(puzzle, fallback_puzzle()),
                origin => panic!("unexpected origin {origin:?}"),
            }
        }
        assert!(relaxed > 0);
    }

    #[test]
    fn hard_steps_down_instead_of_falling_back() {
        let oracle = Dictionary::embedded();
        let config = GeneratorConfig::new(DifficultyTier::Hard);

        let mut fallbacks = 0;
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_puzzle_or_fallback(&config, &oracle, &mut rng);
            match puzzle.origin {
                PuzzleOrigin::Fallback => fallbacks += 1,
                PuzzleOrigin::Generated => {
                    assert_eq!(puzzle.difficulty, DifficultyTier::Hard);
                    assert_eq!(puzzle.words.len(), config.target_count);
                }
                PuzzleOrigin::Relaxed => assert!(
                    puzzle.difficulty < DifficultyTier::Hard
                        || puzzle.words.len() < config.target_count
                ),
                PuzzleOrigin::DailyBook => panic!("regular generation used the daily book"),
            }
            for word in &puzzle.words {
                assert!(puzzle.letters.can_spell(word));
                assert!(puzzle.difficulty.allows_len(word.len()), "seed {seed}: {word}");
            }
        }
        assert!(fallbacks <= 1, "{fallbacks} of 20 hard requests fell back");
    }

    #[test]
    fn step_down_reports_the_tier_used() {
        // Only three-letter words exist, which only the easy tier asks for
        let oracle = Dictionary::from_words(["TEA", "EAT", "ATE"]);
        let config = GeneratorConfig::new(DifficultyTier::Medium).with_max_attempts(3_000);

        let mut relaxed = 0;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_puzzle_or_fallback(&config, &oracle, &mut rng);
            if puzzle.origin == PuzzleOrigin::Relaxed {
                relaxed += 1;
                assert_eq!(puzzle.difficulty, DifficultyTier::Easy);
                assert!(puzzle.words.iter().all(|w| w.len() == 3));
            } else {
                assert_eq!(puzzle, fallback_puzzle());
            }
        }
        assert!(relaxed > 0);
    }

    #[test]
    fn fallback_path_with_embedded_dictionary_holds_invariants() {
        let oracle = Dictionary::embedded();
        for tier in DifficultyTier::ALL {
            let config = GeneratorConfig::new(tier).with_max_attempts(500);
            for seed in 0..5 {
                let mut rng = StdRng::seed_from_u64(seed);
                let puzzle = generate_puzzle_or_fallback(&config, &oracle, &mut rng);
                assert!(puzzle.letters.vowel_count() >= 2);
                assert!(!puzzle.words.is_empty());
                for word in &puzzle.words {
                    assert!(puzzle.letters.can_spell(word));
                    assert!(puzzle.difficulty.allows_len(word.len()));
                    assert!(oracle.contains(word.text()));
                }
            }
        }
    }
}
