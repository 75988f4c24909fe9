//! Daily command
//!
//! Shows the daily puzzle for a date and how long until the next one.

use crate::dictionary::DictionaryOracle;
use crate::generator::{DailyConfig, Puzzle, generate_daily_puzzle, time_until_next_daily};
use chrono::{DateTime, NaiveDate, Utc};

/// Result of looking up a daily puzzle
#[derive(Debug, Clone)]
pub struct DailyResult {
    pub date: NaiveDate,
    pub seed: u64,
    pub puzzle: Puzzle,
    /// Time until the next puzzle unlocks, measured from `now`
    pub next_in: chrono::Duration,
}

/// Look up the daily puzzle for `date`
pub fn run_daily<O>(
    date: NaiveDate,
    oracle: &O,
    config: &DailyConfig,
    now: DateTime<Utc>,
) -> DailyResult
where
    O: DictionaryOracle + ?Sized,
{
    DailyResult {
        date,
        seed: config.seed_policy.seed(date),
        puzzle: generate_daily_puzzle(date, oracle, config),
        next_in: time_until_next_daily(now),
    }
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns a parse error if the text is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
}
