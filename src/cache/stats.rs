//! Suggestion Cache Metrics
//!
//! Counters behind the cache half of `/stats`.

use serde::Serialize;

// == Cache Stats ==
/// How often a keystroke was answered without asking the provider.
///
/// Counted per lookup key, so a hit means a fresh suggestion list for the
/// same country code and query was already stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from a fresh suggestion list
    pub hits: u64,
    /// Lookups that had to go to the provider
    pub misses: u64,
    /// Stored suggestion lists, expired ones included until swept
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of lookups served from the cache, 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Mirrors the store's entry count after an insert or sweep.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
