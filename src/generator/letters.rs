//! Letter set generation

use crate::core::{CONSONANTS, LetterSet, VOWELS};
use rand::Rng;
use rand::seq::SliceRandom;

/// Chance that a free slot draws from the vowels rather than the consonants
pub const VOWEL_REDRAW_PROBABILITY: f64 = 0.3;

/// Whether a letter set may contain the same letter twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Letters are drawn independently and may repeat
    #[default]
    Allow,
    /// Letters already in the set are skipped while unused letters remain
    Reject,
}

impl DuplicatePolicy {
    /// Create a policy from its name ("allow" or "reject"), defaulting to allow
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "reject" | "unique" => Self::Reject,
            _ => Self::Allow,
        }
    }
}

/// Generate the letters for a round
///
/// The first `vowel_minimum` draws are vowels. Every other slot draws from the
/// vowels with probability [`VOWEL_REDRAW_PROBABILITY`] and from the
/// consonants otherwise. The result is shuffled so the guaranteed vowels are
/// not always in front.
///
/// `vowel_minimum` is clamped to `total_count`. With
/// [`DuplicatePolicy::Reject`] a draw falls back to the other alphabet once its
/// own is used up; guaranteed vowel slots instead repeat a vowel, so the vowel
/// minimum always holds. This function never fails.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_weaver::generator::{DuplicatePolicy, generate_letters};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let letters = generate_letters(2, 9, DuplicatePolicy::Allow, &mut rng);
/// assert_eq!(letters.len(), 9);
/// assert!(letters.vowel_count() >= 2);
/// ```
pub fn generate_letters<R: Rng + ?Sized>(
    vowel_minimum: usize,
    total_count: usize,
    policy: DuplicatePolicy,
    rng: &mut R,
) -> LetterSet {
    let vowel_minimum = vowel_minimum.min(total_count);
    let mut letters: Vec<u8> = Vec::with_capacity(total_count);

    for _ in 0..vowel_minimum {
        let letter = draw_letter(VOWELS, None, &letters, policy, rng);
        letters.push(letter);
    }

    while letters.len() < total_count {
        let (primary, secondary) = if rng.random_bool(VOWEL_REDRAW_PROBABILITY) {
            (VOWELS, CONSONANTS)
        } else {
            (CONSONANTS, VOWELS)
        };
        let letter = draw_letter(primary, Some(secondary), &letters, policy, rng);
        letters.push(letter);
    }

    letters.shuffle(rng);
    LetterSet::from_raw(letters)
}

/// Draw one letter from `primary`, honouring the duplicate policy
fn draw_letter<R: Rng + ?Sized>(
    primary: &[u8],
    secondary: Option<&[u8]>,
    taken: &[u8],
    policy: DuplicatePolicy,
    rng: &mut R,
) -> u8 {
    if policy == DuplicatePolicy::Reject {
        for alphabet in std::iter::once(primary).chain(secondary) {
            let unused: Vec<u8> = alphabet
                .iter()
                .copied()
                .filter(|letter| !taken.contains(letter))
                .collect();
            if !unused.is_empty() {
                return unused[rng.random_range(0..unused.len())];
            }
        }
    }

    // Duplicates allowed, or nothing unused is left to pick
    primary[rng.random_range(0..primary.len())]
}
