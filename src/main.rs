//! Word Weaver - CLI
//!
//! Timed word puzzles in a TUI or plain terminal, plus puzzle generation,
//! the daily challenge and a generator benchmark.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::info;
use word_weaver::{
    commands::{parse_date, run_benchmark, run_daily, run_generate, run_simple},
    core::DifficultyTier,
    dictionary::{CachedOracle, Dictionary, loader::load_from_file},
    generator::{
        DailyConfig, DailySeed, DuplicatePolicy, GeneratorConfig, Puzzle,
        generate_daily_puzzle, generate_puzzle_or_fallback, today_utc,
    },
    output::{print_benchmark_result, print_daily_result, print_generate_result},
    scoring::{ScoringParams, ScoringRule},
    session::{GameSession, SessionConfig},
};

#[derive(Parser)]
#[command(
    name = "word_weaver",
    about = "Word puzzles: spell the hidden words from a set of letters before time runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, medium (default), hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Scoring rule: length (default) or letter-value
    #[arg(short, long, global = true, default_value = "length")]
    scoring: String,

    /// Use the difficulty's per-letter base (10/20/30) instead of 1
    #[arg(long, global = true)]
    tiered: bool,

    /// Score multiplier for daily rounds
    #[arg(long, global = true, default_value = "2")]
    daily_multiplier: u32,

    /// Letter duplicates: allow (default) or reject
    #[arg(long, global = true, default_value = "allow")]
    duplicates: String,

    /// Candidate words tried per letter set
    #[arg(long, global = true)]
    attempts: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Play today's daily challenge
        #[arg(long)]
        daily: bool,

        /// Keep the difficulty fixed between rounds
        #[arg(long)]
        fixed: bool,
    },

    /// Simple CLI mode (one round without the TUI)
    Simple {
        /// Play today's daily challenge
        #[arg(long)]
        daily: bool,
    },

    /// Generate a puzzle and print its words
    Generate {
        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the daily puzzle
    Daily {
        /// Date as YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        date: Option<String>,

        /// Seed policy: iso (default) or day-of-month
        #[arg(long, default_value = "iso")]
        seed_policy: String,
    },

    /// Benchmark puzzle generation
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Base seed; puzzle i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => {
            let dictionary = load_from_file(path)
                .with_context(|| format!("failed to load word list from {path}"))?;
            info!("Loaded {} words from {path}", dictionary.len());
            Ok(dictionary)
        }
    }
}

fn generator_config(cli: &Cli, difficulty: DifficultyTier) -> GeneratorConfig {
    let config = GeneratorConfig::new(difficulty)
        .with_duplicates(DuplicatePolicy::from_name(&cli.duplicates));
    match cli.attempts {
        Some(attempts) => config.with_max_attempts(attempts),
        None => config,
    }
}

fn scoring_params(cli: &Cli, difficulty: DifficultyTier) -> ScoringParams {
    let params = if cli.tiered {
        ScoringParams::tiered(difficulty)
    } else {
        ScoringParams::new()
    };
    params
        .with_rule(ScoringRule::from_name(&cli.scoring))
        .with_daily_multiplier(cli.daily_multiplier)
}

fn main() -> Result<()> {
    env_logger::init();
    let mut cli = Cli::parse();

    let difficulty = DifficultyTier::from_name(&cli.difficulty);
    let oracle = CachedOracle::new(load_dictionary(&cli.wordlist)?);
    let generator = generator_config(&cli, difficulty);
    let params = scoring_params(&cli, difficulty);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play {
        daily: false,
        fixed: false,
    });

    match command {
        Commands::Play { daily, fixed } => {
            run_play_command(&oracle, generator, params, daily, fixed)
        }
        Commands::Simple { daily } => run_simple_command(&oracle, generator, params, daily),
        Commands::Generate { seed } => {
            print_generate_result(&run_generate(&generator, &oracle, seed));
            Ok(())
        }
        Commands::Daily { date, seed_policy } => {
            run_daily_command(&oracle, generator, date.as_deref(), &seed_policy)
        }
        Commands::Benchmark { count, seed } => {
            println!("Generating {count} {difficulty} puzzles...");
            let result = run_benchmark(&generator, &oracle, count, seed, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn first_puzzle(
    oracle: &CachedOracle<Dictionary>,
    generator: GeneratorConfig,
    daily: bool,
) -> Puzzle {
    if daily {
        let config = DailyConfig::new(generator, DailySeed::default());
        generate_daily_puzzle(today_utc(), oracle, &config)
    } else {
        generate_puzzle_or_fallback(&generator, oracle, &mut rand::rng())
    }
}

fn run_play_command(
    oracle: &CachedOracle<Dictionary>,
    generator: GeneratorConfig,
    params: ScoringParams,
    daily: bool,
    fixed: bool,
) -> Result<()> {
    use word_weaver::interactive::{App, run_tui};

    let puzzle = first_puzzle(oracle, generator, daily);
    let app = App::new(oracle, generator, params, puzzle);
    run_tui(if fixed { app.without_adaptive() } else { app })
}

fn run_simple_command(
    oracle: &CachedOracle<Dictionary>,
    generator: GeneratorConfig,
    params: ScoringParams,
    daily: bool,
) -> Result<()> {
    let puzzle = first_puzzle(oracle, generator, daily);
    let config = SessionConfig::for_puzzle(&puzzle);
    run_simple(GameSession::new(puzzle, params, config)).context("simple mode failed")
}

fn run_daily_command(
    oracle: &CachedOracle<Dictionary>,
    generator: GeneratorConfig,
    date: Option<&str>,
    seed_policy: &str,
) -> Result<()> {
    let date = match date {
        Some(text) => parse_date(text).with_context(|| format!("invalid date '{text}'"))?,
        None => today_utc(),
    };
    let config = DailyConfig::new(generator, DailySeed::from_name(seed_policy));
    print_daily_result(&run_daily(date, oracle, &config, Utc::now()));
    Ok(())
}
