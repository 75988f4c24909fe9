//! Interactive TUI interface
//!
//! A timed round in the terminal: type words, ask for hints, shuffle the
//! letters. When adaptive difficulty is on, the next round's tier follows the
//! player's recent accuracy and speed.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
