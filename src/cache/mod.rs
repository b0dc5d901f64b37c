//! Cache Module
//!
//! Provides the in-memory suggestion cache with TTL expiration.
//!
//! Entries are never evicted for capacity; an expired entry is ignored on
//! lookup and superseded by the next insert for the same key.

mod entry;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::SuggestionCache;

// == Public Constants ==
/// Default lifetime of a cached suggestion list
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

// == Cache Key ==
/// Builds the cache key `countryCode|query`, both lower-cased.
///
/// Callers pass already trimmed values.
pub fn cache_key(country_code: &str, query: &str) -> String {
    format!("{}|{}", country_code.to_lowercase(), query.to_lowercase())
}
