//! Daily challenge puzzles
//!
//! Every player gets the same puzzle on the same UTC date. The date is turned
//! into a seed, the seed drives a `ChaCha8Rng` through the regular generator,
//! and a curated puzzle book covers the case where generation comes up short.
//! Both the seed and the ChaCha stream are fixed across platforms and crate
//! releases, so a given date maps to one puzzle everywhere.

use super::puzzle::{Puzzle, PuzzleOrigin, book_puzzle};
use super::{GeneratorConfig, generate_letters, generate_words};
use crate::core::{DifficultyTier, RoundMode};
use crate::dictionary::DictionaryOracle;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Curated daily puzzles: letters and their target words
pub const DAILY_BOOK: [(&str, &[&str]); 7] = [
    ("WORDSCAPE", &["WORD", "SCORE", "CAPE", "PACE"]),
    ("TRAINSOLE", &["TRAIN", "STONE", "RAIL", "LIONS", "ALERT"]),
    ("GARDENIMT", &["GARDEN", "DREAM", "TIGER", "MINT", "GRADE"]),
    ("PLANETUBS", &["PLANET", "TABLE", "BLUNT", "PASTE", "SLATE"]),
    ("HOUSEBRCK", &["HOUSE", "HORSE", "SHOCK", "BROKE", "CHORE"]),
    ("FLOWERTAS", &["FLOWER", "WATER", "FLOAT", "STEW", "SOFA"]),
    ("MOUNTAISC", &["MOUNT", "MUSIC", "COINS", "SAINT", "MAIN"]),
];

/// How a calendar date becomes a daily seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DailySeed {
    /// Day of the month (1-31); repeats every month
    DayOfMonth,
    /// Days since 0001-01-01 (proleptic Gregorian, day one is 1), distinct for every day
    #[default]
    IsoDate,
}

impl DailySeed {
    /// Create a seed policy from its name, defaulting to [`DailySeed::IsoDate`]
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "day-of-month" | "day" | "dom" => Self::DayOfMonth,
            _ => Self::IsoDate,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayOfMonth => "day-of-month",
            Self::IsoDate => "iso",
        }
    }

    /// Seed for `date`
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use word_weaver::generator::DailySeed;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
    /// assert_eq!(DailySeed::DayOfMonth.seed(date), 17);
    /// assert_eq!(DailySeed::IsoDate.seed(date), 738_962);
    /// ```
    #[must_use]
    pub fn seed(self, date: NaiveDate) -> u64 {
        match self {
            Self::DayOfMonth => u64::from(date.day()),
            // Reinterpreting the bits keeps dates before year 1 distinct
            Self::IsoDate => u64::from(date.num_days_from_ce() as u32),
        }
    }

    /// Index into [`DAILY_BOOK`] for `date`
    #[must_use]
    pub fn book_index(self, date: NaiveDate) -> usize {
        (self.seed(date) % DAILY_BOOK.len() as u64) as usize
    }
}

/// Settings for daily puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyConfig {
    pub generator: GeneratorConfig,
    pub seed_policy: DailySeed,
}

impl DailyConfig {
    #[must_use]
    pub const fn new(generator: GeneratorConfig, seed_policy: DailySeed) -> Self {
        Self {
            generator,
            seed_policy,
        }
    }
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self::new(GeneratorConfig::new(DifficultyTier::Medium), DailySeed::default())
    }
}

/// Curated puzzle for a book index, wrapping around the book
#[must_use]
pub fn daily_book_entry(index: usize) -> Puzzle {
    let (letters, words) = DAILY_BOOK[index % DAILY_BOOK.len()];
    book_puzzle(
        letters,
        words,
        DifficultyTier::Medium,
        RoundMode::Daily,
        PuzzleOrigin::DailyBook,
    )
}

/// Daily puzzle for `date`
///
/// Deterministic for a deterministic oracle: the same date and config always
/// yield the same puzzle. If seeded generation is exhausted the book entry
/// selected by the seed is returned instead, so this never fails.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use word_weaver::dictionary::Dictionary;
/// use word_weaver::generator::{DailyConfig, generate_daily_puzzle};
///
/// let oracle = Dictionary::embedded();
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let config = DailyConfig::default();
///
/// let first = generate_daily_puzzle(date, &oracle, &config);
/// let second = generate_daily_puzzle(date, &oracle, &config);
/// assert_eq!(first, second);
/// assert!(first.mode.is_daily());
/// ```
pub fn generate_daily_puzzle<O>(date: NaiveDate, oracle: &O, config: &DailyConfig) -> Puzzle
where
    O: DictionaryOracle + ?Sized,
{
    let seed = config.seed_policy.seed(date);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let generator = &config.generator;

    let letters = generate_letters(
        generator.vowel_minimum,
        generator.letter_count,
        generator.duplicates,
        &mut rng,
    );

    match generate_words(
        &letters,
        generator.target_count,
        generator.difficulty,
        oracle,
        generator.max_attempts,
        &mut rng,
    ) {
        Ok(words) => {
            debug!("Generated daily puzzle for {date} from seed {seed}");
            Puzzle {
                letters,
                words,
                difficulty: generator.difficulty,
                mode: RoundMode::Daily,
                origin: PuzzleOrigin::Generated,
            }
        }
        Err(err) => {
            let index = config.seed_policy.book_index(date);
            warn!("Daily generation for {date} failed ({err}); using book entry {index}");
            daily_book_entry(index)
        }
    }
}

/// Today's date in UTC
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Time left until the next daily puzzle unlocks at UTC midnight
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use word_weaver::generator::time_until_next_daily;
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 23, 30, 0).unwrap();
/// assert_eq!(time_until_next_daily(now).num_minutes(), 30);
/// ```
#[must_use]
pub fn time_until_next_daily(now: DateTime<Utc>) -> chrono::Duration {
    now.date_naive()
        .checked_add_days(Days::new(1))
        .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0))
        .map_or_else(chrono::Duration::zero, |midnight| midnight.and_utc() - now)
}
