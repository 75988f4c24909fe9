//! Hint generation
//!
//! Six kinds of hint exist for every word. Each request picks uniformly among
//! the kinds not yet given for that word, so hints never repeat.

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use thiserror::Error;

/// What a hint reveals about its word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
    Length,
    FirstLetter,
    LastLetter,
    MiddleLetter,
    VowelCount,
    RepeatedLetters,
}

impl HintKind {
    pub const ALL: [Self; 6] = [
        Self::Length,
        Self::FirstLetter,
        Self::LastLetter,
        Self::MiddleLetter,
        Self::VowelCount,
        Self::RepeatedLetters,
    ];

    /// Hint text for `word`
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::Word;
    /// use word_weaver::hints::HintKind;
    ///
    /// let word = Word::new("SCORE").unwrap();
    /// assert_eq!(HintKind::Length.describe(&word), "5 letters");
    /// assert_eq!(HintKind::MiddleLetter.describe(&word), "middle letter O");
    /// ```
    #[must_use]
    pub fn describe(self, word: &Word) -> String {
        match self {
            Self::Length => plural(word.len(), "letter"),
            Self::FirstLetter => format!("starts with {}", word.first_letter()),
            Self::LastLetter => format!("ends with {}", word.last_letter()),
            Self::MiddleLetter => format!("middle letter {}", word.middle_letter()),
            Self::VowelCount => plural(word.vowel_count(), "vowel"),
            Self::RepeatedLetters => {
                if word.has_repeated_letters() {
                    "has repeated letters".to_string()
                } else {
                    "no repeated letters".to_string()
                }
            }
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// A hint about one target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub kind: HintKind,
    pub text: String,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Why no hint could be given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoMoreHints {
    #[error("no hints left this round")]
    BudgetExhausted,
    #[error("every hint for this word has been given")]
    KindsExhausted,
}

/// Pick a hint about `word` that has not been given yet
///
/// # Errors
///
/// Returns [`NoMoreHints::BudgetExhausted`] when `hints_remaining` is zero and
/// [`NoMoreHints::KindsExhausted`] when every kind is in `prior_hints`.
///
/// # Examples
/// ```
/// use word_weaver::core::Word;
/// use word_weaver::hints::{NoMoreHints, generate_hint};
///
/// let word = Word::new("SCORE").unwrap();
/// let mut given = Vec::new();
/// for _ in 0..6 {
///     let hint = generate_hint(&word, &given, 10, &mut rand::rng()).unwrap();
///     given.push(hint.kind);
/// }
/// assert_eq!(
///     generate_hint(&word, &given, 10, &mut rand::rng()),
///     Err(NoMoreHints::KindsExhausted)
/// );
/// ```
pub fn generate_hint<R: Rng + ?Sized>(
    word: &Word,
    prior_hints: &[HintKind],
    hints_remaining: u32,
    rng: &mut R,
) -> Result<Hint, NoMoreHints> {
    if hints_remaining == 0 {
        return Err(NoMoreHints::BudgetExhausted);
    }

    let available: Vec<HintKind> = HintKind::ALL
        .into_iter()
        .filter(|kind| !prior_hints.contains(kind))
        .collect();

    let kind = *available.choose(rng).ok_or(NoMoreHints::KindsExhausted)?;
    Ok(Hint {
        kind,
        text: kind.describe(word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn score_hint_texts() {
        let score = word("SCORE");
        let texts: Vec<String> = HintKind::ALL.iter().map(|k| k.describe(&score)).collect();
        assert_eq!(
            texts,
            [
                "5 letters",
                "starts with S",
                "ends with E",
                "middle letter O",
                "2 vowels",
                "no repeated letters",
            ]
        );
    }

    #[test]
    fn repeated_and_singular_texts() {
        let hint = HintKind::RepeatedLetters.describe(&word("LOOM"));
        assert_eq!(hint, "has repeated letters");
        assert_eq!(HintKind::VowelCount.describe(&word("WARP")), "1 vowel");
        assert_eq!(HintKind::VowelCount.describe(&word("RHYTHM")), "0 vowels");
    }

    #[test]
    fn six_distinct_hints_then_exhausted() {
        let score = word("SCORE");
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut given = Vec::new();
            let mut texts = FxHashSet::default();
            for _ in 0..6 {
                let hint = generate_hint(&score, &given, 6, &mut rng).unwrap();
                assert!(!given.contains(&hint.kind));
                given.push(hint.kind);
                texts.insert(hint.text);
            }
            assert_eq!(texts.len(), 6);
            assert_eq!(
                generate_hint(&score, &given, 6, &mut rng),
                Err(NoMoreHints::KindsExhausted)
            );
        }
    }

    #[test]
    fn zero_budget_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_hint(&word("CAPE"), &[], 0, &mut rng),
            Err(NoMoreHints::BudgetExhausted)
        );
    }

    #[test]
    fn budget_is_checked_before_kinds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_hint(&word("CAPE"), &HintKind::ALL, 0, &mut rng),
            Err(NoMoreHints::BudgetExhausted)
        );
    }

    #[test]
    fn picks_cover_every_kind() {
        let cape = word("CAPE");
        let mut seen = FxHashSet::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            seen.insert(generate_hint(&cape, &[], 1, &mut rng).unwrap().kind);
        }
        assert_eq!(seen.len(), HintKind::ALL.len());
    }
}
