//! Round settlement
//!
//! Applied once when a round ends: seconds left on the clock become a bonus
//! and every hint taken costs a fixed penalty.

use super::ScoringParams;
use std::time::Duration;

/// Breakdown of a finished round's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub word_score: u32,
    pub time_bonus: u32,
    pub hint_penalty: u32,
    pub final_score: u32,
}

/// Settle a round
///
/// `final_score = max(0, word_score + time_bonus - hint_penalty)`, where the
/// time bonus counts whole seconds remaining.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use word_weaver::scoring::{ScoringParams, settle_round};
///
/// let summary = settle_round(40, Duration::from_secs(30), 1, &ScoringParams::default());
/// assert_eq!(summary.final_score, 40 + 30 - 25);
/// ```
#[must_use]
pub fn settle_round(
    word_score: u32,
    remaining: Duration,
    hints_used: u32,
    params: &ScoringParams,
) -> RoundSummary {
    let seconds = u32::try_from(remaining.as_secs()).unwrap_or(u32::MAX);
    let time_bonus = seconds.saturating_mul(params.time_bonus_per_second);
    let hint_penalty = hints_used.saturating_mul(params.hint_penalty);

    RoundSummary {
        word_score,
        time_bonus,
        hint_penalty,
        final_score: word_score
            .saturating_add(time_bonus)
            .saturating_sub(hint_penalty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_and_penalty() {
        let params = ScoringParams::default();
        let summary = settle_round(17, Duration::from_millis(12_900), 0, &params);
        assert_eq!(summary.time_bonus, 12);
        assert_eq!(summary.hint_penalty, 0);
        assert_eq!(summary.final_score, 29);
    }

    #[test]
    fn final_score_never_negative() {
        let params = ScoringParams::default();
        let summary = settle_round(10, Duration::ZERO, 3, &params);
        assert_eq!(summary.hint_penalty, 75);
        assert_eq!(summary.final_score, 0);
    }

    #[test]
    fn custom_rates() {
        let mut params = ScoringParams::default();
        params.time_bonus_per_second = 2;
        params.hint_penalty = 5;
        let summary = settle_round(100, Duration::from_secs(10), 2, &params);
        assert_eq!(summary.final_score, 100 + 20 - 10);
    }
}
