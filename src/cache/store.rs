//! Cache Store Module
//!
//! Keyed storage of suggestion lists with TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::AddressSuggestion;

// == Suggestion Cache ==
/// Process-local cache of suggestion lists keyed by `countryCode|query`.
///
/// Unbounded in key count. Expired entries stay in the map until they are
/// overwritten or [`cleanup_expired`](Self::cleanup_expired) runs.
#[derive(Debug)]
pub struct SuggestionCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<Vec<AddressSuggestion>>>,
    /// Performance statistics
    stats: CacheStats,
    /// Lifetime of every inserted entry
    ttl: Duration,
}

impl SuggestionCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns a copy of the cached list if the entry exists and is fresh.
    ///
    /// Records a hit or a miss. An expired entry is left in place.
    pub fn get(&mut self, key: &str) -> Option<Vec<AddressSuggestion>> {
        let now = Instant::now();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores a list under `key`, replacing any previous entry and resetting
    /// its expiry.
    pub fn insert(&mut self, key: String, value: Vec<AddressSuggestion>) {
        self.entries.insert(key, CacheEntry::new(value, self.ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    // == TTL ==
    /// Returns the lifetime given to inserted entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new(super::DEFAULT_TTL)
    }
}
