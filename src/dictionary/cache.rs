//! Word validity cache
//!
//! Caller-owned replacement for a process-wide lookup cache. Entries expire
//! after a TTL (24 hours by default) and are only removed by an explicit
//! [`ValidityCache::evict_expired`] or [`ValidityCache::clear`].

use super::{DictionaryOracle, OracleError};
use log::debug;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Default time-to-live of a cached answer
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy)]
struct Entry {
    valid: bool,
    stored_at: Instant,
}

/// Word → validity answers with a time-to-live
///
/// Time is passed in explicitly so expiry can be tested without sleeping.
#[derive(Debug, Clone)]
pub struct ValidityCache {
    entries: FxHashMap<String, Entry>,
    ttl: Duration,
}

impl ValidityCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: FxHashMap::default(),
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached answer for `word`, or `None` if absent or expired at `now`
    #[must_use]
    pub fn lookup(&self, word: &str, now: Instant) -> Option<bool> {
        self.entries
            .get(word)
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.valid)
    }

    /// Store an answer observed at `now`, replacing any older one
    pub fn insert(&mut self, word: impl Into<String>, valid: bool, now: Instant) {
        self.entries.insert(
            word.into(),
            Entry {
                valid,
                stored_at: now,
            },
        );
    }

    /// Drop every entry that has expired at `now`; returns how many were removed
    pub fn evict_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < ttl);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!("Evicted {evicted} expired dictionary cache entries");
        }
        evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones not yet evicted
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &Entry, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) < self.ttl
    }
}

impl Default for ValidityCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

/// Lookup counters of a [`CachedOracle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Oracle wrapper that remembers answers for the cache TTL
///
/// Only definite answers are cached; oracle errors pass through so a later
/// lookup can retry. The cache sits behind a mutex, so one `CachedOracle` can
/// serve generators running on several threads.
///
/// # Examples
/// ```
/// use word_weaver::dictionary::{CachedOracle, Dictionary, DictionaryOracle};
///
/// let oracle = CachedOracle::new(Dictionary::from_words(["cape"]));
/// assert_eq!(oracle.is_valid_word("CAPE"), Ok(true));
/// assert_eq!(oracle.is_valid_word("CAPE"), Ok(true));
/// assert_eq!(oracle.stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct CachedOracle<O> {
    inner: O,
    cache: Mutex<ValidityCache>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<O> CachedOracle<O> {
    /// Wrap `inner` with a cache using [`DEFAULT_TTL`]
    pub fn new(inner: O) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    pub fn with_ttl(inner: O, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Mutex::new(ValidityCache::new(ttl)),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub const fn inner(&self) -> &O {
        &self.inner
    }

    /// Evict entries that have expired by now
    pub fn evict_expired(&self) -> usize {
        self.cache().evict_expired(Instant::now())
    }

    pub fn clear(&self) {
        self.cache().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache().len(),
        }
    }

    fn cache(&self) -> MutexGuard<'_, ValidityCache> {
        // A panic while holding the lock cannot leave the map half-updated
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O: DictionaryOracle> DictionaryOracle for CachedOracle<O> {
    fn is_valid_word(&self, word: &str) -> Result<bool, OracleError> {
        let now = Instant::now();
        let cached = self.cache().lookup(word, now);
        if let Some(valid) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(valid);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let valid = self.inner.is_valid_word(word)?;
        self.cache().insert(word, valid, now);
        Ok(valid)
    }
}
