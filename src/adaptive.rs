//! Adaptive difficulty
//!
//! Moves the player one tier up or down based on recent accuracy and speed.

use crate::core::DifficultyTier;
use std::collections::VecDeque;
use std::time::Duration;

/// Difficulty adjustment with configurable thresholds
///
/// ## How Thresholds Work
///
/// ```text
/// if accuracy >= promote_accuracy and speed >= promote_speed → harder
/// else if accuracy < demote_accuracy                          → easier
/// else                                                        → unchanged
/// ```
///
/// Tiers saturate: promoting from hard or demoting from easy is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveDifficulty {
    /// Accuracy at or above this (with enough speed) promotes (default: 0.8)
    pub promote_accuracy: f64,

    /// Speed at or above this (with enough accuracy) promotes (default: 0.5)
    pub promote_speed: f64,

    /// Accuracy below this demotes (default: 0.4)
    pub demote_accuracy: f64,
}

impl AdaptiveDifficulty {
    #[must_use]
    pub const fn new(promote_accuracy: f64, promote_speed: f64, demote_accuracy: f64) -> Self {
        Self {
            promote_accuracy,
            promote_speed,
            demote_accuracy,
        }
    }

    /// Tier for the next round
    ///
    /// # Examples
    /// ```
    /// use word_weaver::adaptive::AdaptiveDifficulty;
    /// use word_weaver::core::DifficultyTier;
    ///
    /// let adaptive = AdaptiveDifficulty::default();
    /// assert_eq!(adaptive.next_difficulty(DifficultyTier::Easy, 0.9, 0.7), DifficultyTier::Medium);
    /// assert_eq!(adaptive.next_difficulty(DifficultyTier::Medium, 0.2, 0.9), DifficultyTier::Easy);
    /// assert_eq!(adaptive.next_difficulty(DifficultyTier::Medium, 0.6, 0.9), DifficultyTier::Medium);
    /// ```
    #[must_use]
    pub fn next_difficulty(
        &self,
        current: DifficultyTier,
        recent_accuracy: f64,
        recent_speed: f64,
    ) -> DifficultyTier {
        if recent_accuracy >= self.promote_accuracy && recent_speed >= self.promote_speed {
            current.harder()
        } else if recent_accuracy < self.demote_accuracy {
            current.easier()
        } else {
            current
        }
    }
}

impl Default for AdaptiveDifficulty {
    fn default() -> Self {
        Self::new(0.8, 0.5, 0.4)
    }
}

/// Speed on a `[0, 1]` scale: 1 for instant, 0 at two seconds per letter or slower
#[must_use]
pub fn speed_score(time_spent: Duration, word_len: usize) -> f64 {
    if word_len == 0 {
        return 0.0;
    }
    let budget = 2.0 * word_len as f64;
    (1.0 - time_spent.as_secs_f64() / budget).max(0.0)
}

/// Fraction of attempts that succeeded, zero when nothing was attempted
#[must_use]
pub fn accuracy(hits: usize, attempts: usize) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        hits as f64 / attempts as f64
    }
}

/// One finished guess, as seen by the adaptive model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub success: bool,
    pub time_spent: Duration,
    pub word_len: usize,
}

/// The most recent guesses, oldest dropped first
#[derive(Debug, Clone)]
pub struct PerformanceWindow {
    records: VecDeque<GuessRecord>,
    capacity: usize,
}

impl PerformanceWindow {
    /// Default number of guesses remembered
    pub const DEFAULT_CAPACITY: usize = 5;

    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, record: GuessRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let hits = self.records.iter().filter(|r| r.success).count();
        accuracy(hits, self.records.len())
    }

    /// Mean speed score of the successful guesses
    #[must_use]
    pub fn speed(&self) -> f64 {
        let speeds: Vec<f64> = self
            .records
            .iter()
            .filter(|r| r.success)
            .map(|r| speed_score(r.time_spent, r.word_len))
            .collect();
        if speeds.is_empty() {
            0.0
        } else {
            speeds.iter().sum::<f64>() / speeds.len() as f64
        }
    }

    /// Recommended tier; `current` until the window has any records
    #[must_use]
    pub fn recommend(
        &self,
        adaptive: &AdaptiveDifficulty,
        current: DifficultyTier,
    ) -> DifficultyTier {
        if self.is_empty() {
            current
        } else {
            adaptive.next_difficulty(current, self.accuracy(), self.speed())
        }
    }
}

impl Default for PerformanceWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(success: bool, secs: u64, word_len: usize) -> GuessRecord {
        GuessRecord {
            success,
            time_spent: Duration::from_secs(secs),
            word_len,
        }
    }

    #[test]
    fn thresholds() {
        let adaptive = AdaptiveDifficulty::default();
        let tier = DifficultyTier::Medium;

        assert_eq!(adaptive.next_difficulty(tier, 0.8, 0.5), DifficultyTier::Hard);
        assert_eq!(adaptive.next_difficulty(tier, 0.8, 0.49), DifficultyTier::Medium);
        assert_eq!(adaptive.next_difficulty(tier, 0.4, 0.0), DifficultyTier::Medium);
        assert_eq!(adaptive.next_difficulty(tier, 0.39, 1.0), DifficultyTier::Easy);
    }

    #[test]
    fn tiers_saturate() {
        let adaptive = AdaptiveDifficulty::default();
        assert_eq!(
            adaptive.next_difficulty(DifficultyTier::Hard, 1.0, 1.0),
            DifficultyTier::Hard
        );
        assert_eq!(
            adaptive.next_difficulty(DifficultyTier::Easy, 0.0, 0.0),
            DifficultyTier::Easy
        );
    }

    #[test]
    fn speed_score_scale() {
        assert!((speed_score(Duration::ZERO, 5) - 1.0).abs() < f64::EPSILON);
        assert!((speed_score(Duration::from_secs(5), 5) - 0.5).abs() < f64::EPSILON);
        assert!(speed_score(Duration::from_secs(30), 5).abs() < f64::EPSILON);
        assert!(speed_score(Duration::from_secs(1), 0).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_ratio() {
        assert!((accuracy(3, 4) - 0.75).abs() < f64::EPSILON);
        assert!(accuracy(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn window_drops_oldest() {
        let mut window = PerformanceWindow::new(3);
        window.push(record(false, 10, 4));
        window.push(record(true, 1, 4));
        window.push(record(true, 1, 4));
        window.push(record(true, 1, 4));

        assert_eq!(window.len(), 3);
        assert!((window.accuracy() - 1.0).abs() < f64::EPSILON);
        assert!((window.speed() - 0.875).abs() < 1e-9);
    }

    #[test]
    fn window_recommendation() {
        let adaptive = AdaptiveDifficulty::default();
        let mut window = PerformanceWindow::default();
        assert_eq!(
            window.recommend(&adaptive, DifficultyTier::Medium),
            DifficultyTier::Medium
        );

        for _ in 0..5 {
            window.push(record(true, 1, 5));
        }
        assert_eq!(window.recommend(&adaptive, DifficultyTier::Medium), DifficultyTier::Hard);

        for _ in 0..5 {
            window.push(record(false, 20, 5));
        }
        assert_eq!(window.recommend(&adaptive, DifficultyTier::Medium), DifficultyTier::Easy);
    }
}
