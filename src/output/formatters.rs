//! Formatting utilities for terminal output

use crate::core::Word;
use crate::hints::HintKind;
use std::time::Duration;

/// Letters separated by spaces, e.g. `W O R D S`
#[must_use]
pub fn spaced_letters(letters: &[u8]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, &letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(char::from(letter));
    }
    result
}

/// Blanks for an unfound word, with letters revealed by positional hints
///
/// # Examples
/// ```
/// use word_weaver::core::Word;
/// use word_weaver::hints::HintKind;
/// use word_weaver::output::formatters::mask_word;
///
/// let word = Word::new("SCORE").unwrap();
/// assert_eq!(mask_word(&word, &[]), "_ _ _ _ _");
/// assert_eq!(mask_word(&word, &[HintKind::FirstLetter, HintKind::MiddleLetter]), "S _ O _ _");
/// ```
#[must_use]
pub fn mask_word(word: &Word, hints: &[HintKind]) -> String {
    let len = word.len();
    let revealed = |i: usize| {
        (i == 0 && hints.contains(&HintKind::FirstLetter))
            || (i + 1 == len && hints.contains(&HintKind::LastLetter))
            || (i == len / 2 && hints.contains(&HintKind::MiddleLetter))
    };

    let masked: Vec<u8> = word
        .as_bytes()
        .iter()
        .enumerate()
        .map(|(i, &b)| if revealed(i) { b } else { b'_' })
        .collect();
    spaced_letters(&masked)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    // Cast is safe: values are clamped to [0, width]
    let filled = ((ratio * width as f64).max(0.0) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Round clock as `m:ss`
#[must_use]
pub fn format_clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Countdown as `5h 45m`
#[must_use]
pub fn format_countdown(duration: chrono::Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters_joins() {
        assert_eq!(spaced_letters(b"CAPE"), "C A P E");
        assert_eq!(spaced_letters(b""), "");
    }

    #[test]
    fn mask_reveals_last_letter() {
        let word = Word::new("PACE").unwrap();
        assert_eq!(mask_word(&word, &[HintKind::LastLetter]), "_ _ _ E");
        // Non-positional hints reveal nothing
        assert_eq!(mask_word(&word, &[HintKind::VowelCount]), "_ _ _ _");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn clock_and_countdown() {
        assert_eq!(format_clock(Duration::from_secs(65)), "1:05");
        assert_eq!(format_clock(Duration::ZERO), "0:00");
        assert_eq!(format_countdown(chrono::Duration::minutes(345)), "5h 45m");
    }
}
