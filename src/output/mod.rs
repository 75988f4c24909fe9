//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_daily_result, print_generate_result, print_puzzle,
    render_puzzle, render_round_summary,
};
