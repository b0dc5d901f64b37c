//! Address Suggestion Service
//!
//! Cache lookup, provider fetch, normalization and deduplication behind a
//! single `suggest` call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{dedup, normalize};
use crate::cache::{cache_key, CacheStats, SuggestionCache};
use crate::models::AddressSuggestion;
use crate::provider::{AddressProvider, SearchRequest};

// == Service Stats ==
/// Snapshot of cache and provider counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceStats {
    /// Hit/miss counters and entry count of the suggestion cache
    pub cache: CacheStats,
    /// Lookups sent to the provider
    pub provider_requests: u64,
    /// Lookups that failed and degraded to an empty list
    pub provider_failures: u64,
}

// == Address Suggestion Service ==
/// Resolves free-text address fragments into normalized suggestions.
///
/// The cache is injected so its lifetime is owned by the caller and shared
/// with the cleanup task when one runs.
#[derive(Debug)]
pub struct AddressSuggestionService {
    provider: Arc<dyn AddressProvider>,
    cache: Arc<RwLock<SuggestionCache>>,
    provider_requests: AtomicU64,
    provider_failures: AtomicU64,
}

impl AddressSuggestionService {
    // == Constructor ==
    pub fn new(provider: Arc<dyn AddressProvider>, cache: Arc<RwLock<SuggestionCache>>) -> Self {
        Self {
            provider,
            cache,
            provider_requests: AtomicU64::new(0),
            provider_failures: AtomicU64::new(0),
        }
    }

    // == Suggest ==
    /// Returns up to seven deduplicated suggestions for `query` in the
    /// country `country_code`.
    ///
    /// Never fails: provider errors are logged and yield an empty list,
    /// which is not cached. Fresh results are cached under
    /// `countryCode|query` for the cache TTL.
    ///
    /// Dropping the returned future before the provider answers leaves the
    /// cache untouched.
    pub async fn suggest(&self, query: &str, country_code: &str) -> Vec<AddressSuggestion> {
        let query = query.trim();
        let country_code = country_code.trim().to_lowercase();
        if query.is_empty() || country_code.is_empty() {
            debug!("Empty query or country code, skipping lookup");
            return Vec::new();
        }

        let key = cache_key(&country_code, query);
        let cached = self.cache.write().await.get(&key);
        if let Some(suggestions) = cached {
            debug!("Cache hit for '{}'", key);
            return suggestions;
        }
        debug!("Cache miss for '{}'", key);

        let request = SearchRequest::new(query, country_code.as_str());
        self.provider_requests.fetch_add(1, Ordering::Relaxed);

        let places = match self.provider.search(&request).await {
            Ok(places) => places,
            Err(err) => {
                self.provider_failures.fetch_add(1, Ordering::Relaxed);
                warn!("Address lookup for '{}' failed: {}", key, err);
                return Vec::new();
            }
        };

        let output_country = country_code.to_uppercase();
        let suggestions = dedup(
            places
                .iter()
                .filter_map(|place| normalize(place, &output_country))
                .collect(),
        );
        debug!(
            "Provider returned {} places, {} usable suggestions for '{}'",
            places.len(),
            suggestions.len(),
            key
        );

        self.cache.write().await.insert(key, suggestions.clone());
        suggestions
    }

    // == Stats ==
    /// Returns current cache and provider counters.
    pub async fn stats(&self) -> ServiceStats {
        ServiceStats {
            cache: self.cache.read().await.stats(),
            provider_requests: self.provider_requests.load(Ordering::Relaxed),
            provider_failures: self.provider_failures.load(Ordering::Relaxed),
        }
    }

    /// Shared handle to the injected cache.
    pub fn cache(&self) -> Arc<RwLock<SuggestionCache>> {
        Arc::clone(&self.cache)
    }
}
