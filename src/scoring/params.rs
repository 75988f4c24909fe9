//! Scoring parameters

use crate::core::{DifficultyTier, RoundMode};

/// Scrabble-style letter values, indexed A-Z
pub const LETTER_POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// How a correct word is valued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// Word length times the per-letter value, doubled on daily rounds
    #[default]
    Length,
    /// Sum of the letter values; daily rounds are not multiplied
    LetterValue,
}

impl ScoringRule {
    /// Create a rule from its name, defaulting to [`ScoringRule::Length`]
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "letter-value" | "letters" | "scrabble" => Self::LetterValue,
            _ => Self::Length,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::LetterValue => "letter-value",
        }
    }
}

/// Inputs to every score computation
///
/// Plain data with no hidden state, so the same parameters always produce
/// the same scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParams {
    pub rule: ScoringRule,

    /// Points per letter under [`ScoringRule::Length`] (default: 1)
    pub per_letter: u32,

    /// Multiplier for daily rounds under [`ScoringRule::Length`] (default: 2)
    pub daily_multiplier: u32,

    /// Letter table for [`ScoringRule::LetterValue`]
    pub letter_points: [u32; 26],

    /// Round-end bonus per second left on the clock (default: 1)
    pub time_bonus_per_second: u32,

    /// Round-end deduction per hint used (default: 25)
    pub hint_penalty: u32,
}

impl ScoringParams {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rule: ScoringRule::Length,
            per_letter: 1,
            daily_multiplier: 2,
            letter_points: LETTER_POINTS,
            time_bonus_per_second: 1,
            hint_penalty: 25,
        }
    }

    /// Defaults with the tier's per-letter base (10/20/30)
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::{DifficultyTier, RoundMode};
    /// use word_weaver::scoring::ScoringParams;
    ///
    /// let params = ScoringParams::tiered(DifficultyTier::Hard);
    /// assert_eq!(params.word_score("CAPE", RoundMode::Regular), 120);
    /// ```
    #[must_use]
    pub const fn tiered(difficulty: DifficultyTier) -> Self {
        let mut params = Self::new();
        params.per_letter = difficulty.letter_base();
        params
    }

    #[must_use]
    pub const fn with_rule(mut self, rule: ScoringRule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub const fn with_daily_multiplier(mut self, daily_multiplier: u32) -> Self {
        self.daily_multiplier = daily_multiplier;
        self
    }

    /// Value of one uppercase letter; anything else is worth nothing
    #[must_use]
    pub const fn letter_value(&self, letter: u8) -> u32 {
        if letter.is_ascii_uppercase() {
            self.letter_points[(letter - b'A') as usize]
        } else {
            0
        }
    }

    /// Points for a correct uppercase `word` in a round of the given mode
    #[must_use]
    pub fn word_score(&self, word: &str, mode: RoundMode) -> u32 {
        match self.rule {
            ScoringRule::Length => {
                let multiplier = if mode.is_daily() {
                    self.daily_multiplier
                } else {
                    1
                };
                u32::try_from(word.len())
                    .unwrap_or(u32::MAX)
                    .saturating_mul(self.per_letter)
                    .saturating_mul(multiplier)
            }
            ScoringRule::LetterValue => word
                .bytes()
                .map(|b| self.letter_value(b))
                .fold(0, u32::saturating_add),
        }
    }
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = ScoringParams::default();
        assert_eq!(params.rule, ScoringRule::Length);
        assert_eq!(params.per_letter, 1);
        assert_eq!(params.daily_multiplier, 2);
        assert_eq!(params.time_bonus_per_second, 1);
        assert_eq!(params.hint_penalty, 25);
    }

    #[test]
    fn length_rule() {
        let params = ScoringParams::default();
        assert_eq!(params.word_score("WORD", RoundMode::Regular), 4);
        assert_eq!(params.word_score("SCORE", RoundMode::Regular), 5);
        assert_eq!(params.word_score("CAPE", RoundMode::Daily), 8);

        let params = params.with_daily_multiplier(3);
        assert_eq!(params.word_score("CAPE", RoundMode::Daily), 12);
    }

    #[test]
    fn tiered_bases() {
        assert_eq!(
            ScoringParams::tiered(DifficultyTier::Easy).word_score("CAT", RoundMode::Regular),
            30
        );
        assert_eq!(
            ScoringParams::tiered(DifficultyTier::Medium).word_score("CAPE", RoundMode::Daily),
            160
        );
    }

    #[test]
    fn letter_value_rule_ignores_daily() {
        let params = ScoringParams::default().with_rule(ScoringRule::LetterValue);
        // Q10 U1 I1 Z10
        assert_eq!(params.word_score("QUIZ", RoundMode::Regular), 22);
        assert_eq!(params.word_score("QUIZ", RoundMode::Daily), 22);
        // W4 O1 R1 D2
        assert_eq!(params.word_score("WORD", RoundMode::Regular), 8);
    }

    #[test]
    fn letter_value_table() {
        let params = ScoringParams::default();
        assert_eq!(params.letter_value(b'A'), 1);
        assert_eq!(params.letter_value(b'K'), 5);
        assert_eq!(params.letter_value(b'Z'), 10);
        assert_eq!(params.letter_value(b'a'), 0);
    }

    #[test]
    fn rule_from_name() {
        assert_eq!(ScoringRule::from_name("letter-value"), ScoringRule::LetterValue);
        assert_eq!(ScoringRule::from_name("SCRABBLE"), ScoringRule::LetterValue);
        assert_eq!(ScoringRule::from_name("length"), ScoringRule::Length);
        assert_eq!(ScoringRule::from_name("bogus"), ScoringRule::Length);
    }
}
