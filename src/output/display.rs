//! Display functions for command results

use super::formatters::{create_progress_bar, format_countdown, spaced_letters};
use crate::commands::{BenchmarkResult, DailyResult, GenerateResult};
use crate::generator::{Puzzle, PuzzleOrigin};
use crate::scoring::RoundSummary;
use colored::Colorize;
use std::fmt::Write as _;

/// Print a puzzle's letters and target words
pub fn print_puzzle(puzzle: &Puzzle) {
    print!("{}", render_puzzle(puzzle));
}

/// Letters, tier, mode, origin and the numbered word list of a puzzle
#[must_use]
pub fn render_puzzle(puzzle: &Puzzle) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "\n{}", "─".repeat(60).cyan());
    let _ = writeln!(
        text,
        "Letters: {}",
        spaced_letters(puzzle.letters.letters())
            .bright_yellow()
            .bold()
    );
    let _ = writeln!(
        text,
        "Difficulty: {} | Mode: {} | Origin: {}",
        puzzle.difficulty,
        if puzzle.mode.is_daily() {
            "daily"
        } else {
            "regular"
        },
        origin_label(puzzle.origin)
    );
    let _ = writeln!(text, "{}", "─".repeat(60).cyan());

    for (i, word) in puzzle.words.iter().enumerate() {
        let _ = writeln!(
            text,
            "  {}. {} ({} letters)",
            i + 1,
            word.text().bright_white().bold(),
            word.len()
        );
    }
    text
}

fn origin_label(origin: PuzzleOrigin) -> colored::ColoredString {
    match origin {
        PuzzleOrigin::Generated => origin.name().green(),
        PuzzleOrigin::Relaxed | PuzzleOrigin::DailyBook => origin.name().yellow(),
        PuzzleOrigin::Fallback => origin.name().red(),
    }
}

/// Print the result of the generate command
pub fn print_generate_result(result: &GenerateResult) {
    print_puzzle(&result.puzzle);
    println!();
    if let Some(seed) = result.seed {
        println!("Seed: {seed}");
    }
    println!("Generated in {:.1}ms", result.duration.as_secs_f64() * 1000.0);
}

/// Print the result of the daily command
pub fn print_daily_result(result: &DailyResult) {
    println!(
        "\n📅 {} {}",
        "Daily puzzle for".bright_cyan().bold(),
        result.date.to_string().bright_yellow().bold()
    );
    print_puzzle(&result.puzzle);
    println!();
    println!("Seed: {}", result.seed);
    println!("Next puzzle in: {}", format_countdown(result.next_in));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    println!(
        "   Success rate:     {}",
        format!("{:.1}%", result.success_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Words/puzzle:     {:.2} (min {}, max {})",
        result.average_words, result.min_words, result.max_words
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    println!("\n📈 {}", "Origins:".bright_cyan().bold());
    for (label, count) in [
        ("generated", result.generated),
        ("relaxed", result.relaxed),
        ("fallback", result.fallback),
    ] {
        let pct = if result.total_puzzles == 0 {
            0.0
        } else {
            count as f64 / result.total_puzzles as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {label:<10} {} {count:4} ({pct:5.1}%)", bar.green());
    }

    println!("\n🗃  {}", "Dictionary cache:".bright_cyan().bold());
    println!(
        "   {} hits, {} misses ({:.1}% hit rate), {} entries",
        result.cache.hits,
        result.cache.misses,
        result.cache.hit_rate() * 100.0,
        result.cache.entries
    );
}

/// Score breakdown shown when a round ends
#[must_use]
pub fn render_round_summary(summary: &RoundSummary) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "\n{}", "═".repeat(40).bright_cyan());
    let _ = writeln!(text, "  {}", "ROUND OVER".bright_green().bold());
    let _ = writeln!(text, "{}", "═".repeat(40).bright_cyan());
    let _ = writeln!(text, "  Word score:    {}", summary.word_score);
    let _ = writeln!(text, "  Time bonus:   +{}", summary.time_bonus.to_string().green());
    let _ = writeln!(text, "  Hint penalty: -{}", summary.hint_penalty.to_string().red());
    let _ = writeln!(
        text,
        "  Final score:   {}",
        summary.final_score.to_string().bright_yellow().bold()
    );
    text.push('\n');
    text
}
