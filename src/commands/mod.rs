//! Command implementations

pub mod benchmark;
pub mod daily;
pub mod generate;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use daily::{DailyResult, parse_date, run_daily};
pub use generate::{GenerateResult, run_generate};
pub use simple::{SimpleCommand, run_simple, run_simple_with};
