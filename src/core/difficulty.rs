//! Difficulty tiers
//!
//! A tier fixes the length bounds of target words, how many target words a
//! regular round asks for, and the per-letter base used by tiered scoring.

use std::fmt;
use std::ops::RangeInclusive;

/// Difficulty tier of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DifficultyTier {
    /// Target words of 3-5 letters
    Easy,
    /// Target words of 4-7 letters
    #[default]
    Medium,
    /// Target words of 5-9 letters
    Hard,
}

impl DifficultyTier {
    /// All tiers from easiest to hardest
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Create a tier from its name
    ///
    /// Supported names: "easy", "medium", "hard" (case-insensitive).
    /// Defaults to medium if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Shortest allowed target word
    #[must_use]
    pub const fn min_len(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 5,
        }
    }

    /// Longest allowed target word
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 7,
            Self::Hard => 9,
        }
    }

    /// Check whether a word length is inside this tier's bounds
    #[must_use]
    pub const fn allows_len(self, len: usize) -> bool {
        len >= self.min_len() && len <= self.max_len()
    }

    /// Lengths the generator synthesizes candidates at
    ///
    /// The window is `[min, min(max, min + 3, letter_count)]`. Returns `None`
    /// when the letter set is too short for the tier's minimum length.
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::DifficultyTier;
    ///
    /// assert_eq!(DifficultyTier::Easy.candidate_lengths(9), Some(3..=5));
    /// assert_eq!(DifficultyTier::Hard.candidate_lengths(9), Some(5..=8));
    /// assert_eq!(DifficultyTier::Hard.candidate_lengths(4), None);
    /// ```
    #[must_use]
    pub fn candidate_lengths(self, letter_count: usize) -> Option<RangeInclusive<usize>> {
        let min = self.min_len();
        let max = self.max_len().min(min + 3).min(letter_count);
        (max >= min).then_some(min..=max)
    }

    /// Default number of target words for a regular round
    #[must_use]
    pub const fn default_target_count(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 4,
            Self::Hard => 3,
        }
    }

    /// Per-letter base points used by tiered scoring (10/20/30)
    #[must_use]
    pub const fn letter_base(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 20,
            Self::Hard => 30,
        }
    }

    /// Hints a player may take per round (3/2/1)
    #[must_use]
    pub const fn hint_budget(self) -> u32 {
        match self {
            Self::Easy => 3,
            Self::Medium => 2,
            Self::Hard => 1,
        }
    }

    /// Next easier tier, saturating at easy
    #[must_use]
    pub const fn easier(self) -> Self {
        match self {
            Self::Easy | Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }

    /// Next harder tier, saturating at hard
    #[must_use]
    pub const fn harder(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium | Self::Hard => Self::Hard,
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a round is a regular round or the daily challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundMode {
    #[default]
    Regular,
    Daily,
}

impl RoundMode {
    #[must_use]
    pub const fn is_daily(self) -> bool {
        matches!(self, Self::Daily)
    }
}
