//! Dictionary oracles
//!
//! The generator asks a [`DictionaryOracle`] whether a synthesized candidate is
//! a real word. The embedded [`Dictionary`] answers from a word list compiled
//! into the binary; [`CachedOracle`] puts a caller-owned TTL cache in front of
//! any oracle.

mod cache;
mod embedded;
pub mod loader;
mod store;

pub use cache::{CacheStats, CachedOracle, DEFAULT_TTL, ValidityCache};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use store::Dictionary;

use std::time::Duration;
use thiserror::Error;

/// Answers "is this a real word?"
///
/// Implementations receive uppercase candidates. An `Err` means the oracle
/// could not answer; the generator treats that candidate as rejected.
pub trait DictionaryOracle {
    /// Check whether `word` is a valid dictionary word
    ///
    /// # Errors
    ///
    /// Returns `OracleError` if the oracle is unreachable or timed out.
    fn is_valid_word(&self, word: &str) -> Result<bool, OracleError>;
}

impl<O: DictionaryOracle + ?Sized> DictionaryOracle for &O {
    fn is_valid_word(&self, word: &str) -> Result<bool, OracleError> {
        (**self).is_valid_word(word)
    }
}

/// Failure to get an answer from a dictionary oracle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("dictionary oracle unavailable: {0}")]
    Unavailable(String),
    #[error("dictionary lookup timed out after {0:?}")]
    Timeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl DictionaryOracle for Offline {
        fn is_valid_word(&self, _word: &str) -> Result<bool, OracleError> {
            Err(OracleError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn references_are_oracles() {
        fn ask<O: DictionaryOracle>(oracle: O, word: &str) -> Result<bool, OracleError> {
            oracle.is_valid_word(word)
        }

        let dictionary = Dictionary::from_words(["cape"]);
        assert_eq!(ask(&dictionary, "CAPE"), Ok(true));
        assert_eq!(ask(&&dictionary, "ZORK"), Ok(false));
    }

    #[test]
    fn trait_objects_are_oracles() {
        let oracle: &dyn DictionaryOracle = &Offline;
        assert!(matches!(
            oracle.is_valid_word("CAPE"),
            Err(OracleError::Unavailable(_))
        ));
    }

    #[test]
    fn oracle_error_messages() {
        let err = OracleError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "dictionary lookup timed out after 250ms");
        let err = OracleError::Unavailable("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "dictionary oracle unavailable: connection refused"
        );
    }
}
