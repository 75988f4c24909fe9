//! Benchmark command
//!
//! Generates many puzzles in parallel against one shared cached oracle and
//! reports how often generation needed to relax or fall back.

use crate::dictionary::{CacheStats, CachedOracle, DictionaryOracle};
use crate::generator::{GeneratorConfig, PuzzleOrigin, generate_puzzle_or_fallback};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub generated: usize,
    pub relaxed: usize,
    pub fallback: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub duration: Duration,
    pub puzzles_per_second: f64,
    pub cache: CacheStats,
}

impl BenchmarkResult {
    /// Fraction of puzzles generated with the requested constraints
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_puzzles == 0 {
            0.0
        } else {
            self.generated as f64 / self.total_puzzles as f64
        }
    }
}

/// Generate `count` puzzles in parallel
///
/// Puzzle `i` uses a `StdRng` seeded with `seed + i`, so a run is
/// reproducible for a deterministic oracle regardless of thread scheduling.
pub fn run_benchmark<O>(
    config: &GeneratorConfig,
    oracle: &CachedOracle<O>,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult
where
    O: DictionaryOracle + Sync,
{
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{} puzzles", config.difficulty));

    let start = Instant::now();
    let outcomes: Vec<(PuzzleOrigin, usize)> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let puzzle = generate_puzzle_or_fallback(config, oracle, &mut rng);
            pb.inc(1);
            (puzzle.origin, puzzle.words.len())
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let count_origin =
        |origin: PuzzleOrigin| outcomes.iter().filter(|(o, _)| *o == origin).count();
    let total_words: usize = outcomes.iter().map(|(_, words)| words).sum();

    BenchmarkResult {
        total_puzzles: count,
        generated: count_origin(PuzzleOrigin::Generated),
        relaxed: count_origin(PuzzleOrigin::Relaxed),
        fallback: count_origin(PuzzleOrigin::Fallback),
        average_words: if count == 0 {
            0.0
        } else {
            total_words as f64 / count as f64
        },
        min_words: outcomes.iter().map(|(_, w)| *w).min().unwrap_or(0),
        max_words: outcomes.iter().map(|(_, w)| *w).max().unwrap_or(0),
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
        cache: oracle.stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DifficultyTier;
    use crate::dictionary::Dictionary;

    #[test]
    fn benchmark_counts_add_up() {
        let oracle = CachedOracle::new(Dictionary::embedded());
        let config = GeneratorConfig::new(DifficultyTier::Easy).with_max_attempts(200);
        let result = run_benchmark(&config, &oracle, 12, 7, false);

        assert_eq!(result.total_puzzles, 12);
        assert_eq!(result.generated + result.relaxed + result.fallback, 12);
        assert!(result.min_words >= 1);
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
        assert!(result.cache.hits + result.cache.misses > 0);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let config = GeneratorConfig::default().with_max_attempts(150);
        let a = run_benchmark(&config, &CachedOracle::new(Dictionary::embedded()), 8, 3, false);
        let b = run_benchmark(&config, &CachedOracle::new(Dictionary::embedded()), 8, 3, false);
        assert_eq!(a.generated, b.generated);
        assert_eq!(a.relaxed, b.relaxed);
        assert_eq!(a.fallback, b.fallback);
    }

    #[test]
    fn empty_benchmark() {
        let oracle = CachedOracle::new(Dictionary::new());
        let result = run_benchmark(&GeneratorConfig::default(), &oracle, 0, 0, false);
        assert_eq!(result.total_puzzles, 0);
        assert!(result.success_rate().abs() < f64::EPSILON);
        assert_eq!(result.min_words, 0);
    }
}
