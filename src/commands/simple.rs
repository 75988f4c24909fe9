//! Simple interactive CLI mode
//!
//! Text-based round on stdin/stdout without the TUI.

use crate::output::display::{render_puzzle, render_round_summary};
use crate::output::formatters::{format_clock, mask_word, spaced_letters};
use crate::scoring::{Outcome, RoundSummary};
use crate::session::GameSession;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(String),
    Hint,
    Shuffle,
    Words,
    Quit,
}

impl SimpleCommand {
    /// Interpret one input line; `None` for a blank line
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Some(match input.to_ascii_lowercase().as_str() {
            "?" | ":hint" | "/hint" => Self::Hint,
            ":shuffle" | "/shuffle" | "!" => Self::Shuffle,
            ":words" | "/words" => Self::Words,
            ":quit" | "/quit" | ":q" => Self::Quit,
            _ => Self::Guess(input.to_string()),
        })
    }
}

/// Play one round on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple(session: GameSession) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, stdin.lock(), &mut io::stdout()).map(|_| ())
}

/// Play one round reading commands from `input`
///
/// Quitting settles the round without a time bonus.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_simple_with<R: BufRead, W: Write>(
    mut session: GameSession,
    input: R,
    out: &mut W,
) -> io::Result<RoundSummary> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║               Word Weaver - Interactive Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Spell the hidden words using the letters below.")?;
    writeln!(
        out,
        "Commands: '?' for a hint, '!' to shuffle, ':words' to list, ':quit' to give up\n"
    )?;

    let mut rng = rand::rng();
    print_board(&session, out)?;

    let mut forfeited = false;
    let mut lines = input.lines();
    while !session.is_over() {
        write!(out, "[{}] Guess: ", format_clock(session.remaining()))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let Some(command) = SimpleCommand::parse(&line?) else {
            continue;
        };

        match command {
            SimpleCommand::Quit => {
                forfeited = true;
                break;
            }
            SimpleCommand::Shuffle => {
                session.shuffle_letters(&mut rng);
                print_board(&session, out)?;
            }
            SimpleCommand::Words => print_board(&session, out)?,
            SimpleCommand::Hint => match session.request_hint(&mut rng) {
                Ok(given) => writeln!(
                    out,
                    "💡 {} ({} hints left)",
                    given.hint.text.bright_yellow(),
                    session.hints_remaining()
                )?,
                Err(err) => writeln!(out, "{}", err.to_string().red())?,
            },
            SimpleCommand::Guess(guess) => match session.submit(&guess) {
                Outcome::Correct { score } => {
                    writeln!(
                        out,
                        "{} +{score} (total {})",
                        "✓ Correct!".green().bold(),
                        session.score()
                    )?;
                    print_board(&session, out)?;
                }
                Outcome::AlreadyGuessed => {
                    writeln!(out, "{}", "Already found that one.".yellow())?;
                }
                Outcome::Invalid => writeln!(out, "{}", "✗ Not one of the words.".red())?,
            },
        }
    }

    if session.is_complete() {
        writeln!(out, "\n{}", "🎉 All words found!".bright_green().bold())?;
    } else if session.remaining().is_zero() {
        writeln!(out, "\n{}", "⏰ Time's up!".bright_red().bold())?;
    }

    let summary = if forfeited {
        session.forfeit()
    } else {
        session.finish()
    };
    write!(out, "{}", render_puzzle(session.puzzle()))?;
    write!(out, "{}", render_round_summary(&summary))?;
    Ok(summary)
}

fn print_board<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n  {}\n",
        spaced_letters(session.display_letters()).bright_yellow().bold()
    )?;
    for word in session.puzzle().words.iter() {
        if session.is_found(word) {
            writeln!(out, "  {}", spaced_letters(word.as_bytes()).green())?;
        } else {
            writeln!(out, "  {}", mask_word(word, session.hints_for(word)))?;
        }
    }
    writeln!(
        out,
        "\n  Score: {} | Hints left: {}\n",
        session.score(),
        session.hints_remaining()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fallback_puzzle;
    use crate::scoring::ScoringParams;
    use crate::session::SessionConfig;
    use std::io::Cursor;

    fn session() -> GameSession {
        let puzzle = fallback_puzzle();
        let config = SessionConfig::for_puzzle(&puzzle);
        GameSession::new(puzzle, ScoringParams::default(), config)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleCommand::parse("  "), None);
        assert_eq!(SimpleCommand::parse("?"), Some(SimpleCommand::Hint));
        assert_eq!(SimpleCommand::parse(":QUIT"), Some(SimpleCommand::Quit));
        assert_eq!(SimpleCommand::parse("!"), Some(SimpleCommand::Shuffle));
        assert_eq!(
            SimpleCommand::parse(" cape "),
            Some(SimpleCommand::Guess("cape".to_string()))
        );
    }

    #[test]
    fn scripted_round_finds_every_word() {
        colored::control::set_override(false);
        let input = Cursor::new("word\nword\nzork\n?\n!\nscore\ncape\npace\n");
        let mut out = Vec::new();
        run_simple_with(session(), input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Already found that one."));
        assert!(text.contains("Not one of the words."));
        assert!(text.contains("All words found!"));
        assert!(text.contains("💡"));
        assert!(text.contains("Origin: fallback"));
        assert!(text.contains("ROUND OVER"));
        assert!(text.contains("Word score:    17"));
        assert!(text.contains("Final score:"));
    }

    #[test]
    fn quit_ends_round_early() {
        colored::control::set_override(false);
        let input = Cursor::new("cape\n:quit\nword\n");
        let mut out = Vec::new();
        let summary = run_simple_with(session(), input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("+4 (total 4)"));
        assert!(!text.contains("All words found!"));
        assert_eq!(summary.time_bonus, 0);
        assert_eq!(summary.final_score, 4);
        assert!(text.contains("Final score:   4"));
    }

    #[test]
    fn quitting_at_once_scores_nothing() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let summary = run_simple_with(session(), Cursor::new(":quit\n"), &mut out).unwrap();

        assert_eq!(summary.word_score, 0);
        assert_eq!(summary.time_bonus, 0);
        assert_eq!(summary.final_score, summary.word_score);
    }
}
