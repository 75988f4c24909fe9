//! Target word synthesis
//!
//! Candidates are drawn from distinct positions of the letter set, so every
//! candidate is a sub-multiset of the letters by construction. The dictionary
//! oracle decides which candidates are real words.

use super::GenerationExhausted;
use super::puzzle::WordList;
use crate::core::{DifficultyTier, LetterSet, Word};
use crate::dictionary::DictionaryOracle;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

/// Default number of candidates tried before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 2000;

/// Synthesize up to `target_count` dictionary words from `letters`
///
/// Each attempt picks a length from the tier's candidate window, draws that
/// many distinct positions of the letter set in random order and asks the
/// oracle about the result. Accepted words are unique and kept in the order
/// they were found. Oracle errors count as rejected candidates.
///
/// # Errors
///
/// Returns [`GenerationExhausted`] if fewer than `target_count` words were
/// found within `max_attempts` candidates, including when the letter set is
/// shorter than the tier's minimum word length.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_weaver::core::{DifficultyTier, LetterSet};
/// use word_weaver::dictionary::Dictionary;
/// use word_weaver::generator::generate_words;
///
/// let letters = LetterSet::parse("CAPE").unwrap();
/// let oracle = Dictionary::from_words(["cape", "pace"]);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let words = generate_words(&letters, 2, DifficultyTier::Medium, &oracle, 500, &mut rng).unwrap();
/// assert!(words.contains("CAPE") && words.contains("PACE"));
/// ```
pub fn generate_words<O, R>(
    letters: &LetterSet,
    target_count: usize,
    difficulty: DifficultyTier,
    oracle: &O,
    max_attempts: usize,
    rng: &mut R,
) -> Result<WordList, GenerationExhausted>
where
    O: DictionaryOracle + ?Sized,
    R: Rng + ?Sized,
{
    let mut words = WordList::new();
    let mut attempts = 0;
    let mut oracle_failures = 0;

    let Some(lengths) = difficulty.candidate_lengths(letters.len()) else {
        debug!(
            "Letter set {letters} is too short for {difficulty} words (min {})",
            difficulty.min_len()
        );
        return finish(words, target_count, attempts, oracle_failures);
    };

    let mut positions: Vec<usize> = (0..letters.len()).collect();

    while words.len() < target_count && attempts < max_attempts {
        attempts += 1;

        let length = rng.random_range(lengths.clone());
        let (chosen, _) = positions.partial_shuffle(rng, length);
        let candidate: String = chosen
            .iter()
            .map(|&i| char::from(letters.letters()[i]))
            .collect();

        if words.contains(&candidate) {
            continue;
        }

        match oracle.is_valid_word(&candidate) {
            Ok(true) => {
                trace!("Accepted {candidate} after {attempts} attempts");
                words.insert(Word::from_trusted(candidate));
            }
            Ok(false) => {}
            Err(err) => {
                oracle_failures += 1;
                trace!("Oracle failed for {candidate}: {err}");
            }
        }
    }

    finish(words, target_count, attempts, oracle_failures)
}

fn finish(
    words: WordList,
    target_count: usize,
    attempts: usize,
    oracle_failures: usize,
) -> Result<WordList, GenerationExhausted> {
    if words.len() >= target_count {
        debug!(
            "Found {} words in {attempts} attempts ({oracle_failures} oracle failures)",
            words.len()
        );
        Ok(words)
    } else {
        Err(GenerationExhausted {
            attempts,
            found: words.len(),
            target: target_count,
            oracle_failures,
        })
    }
}
