//! API Handlers
//!
//! HTTP request handlers for each suggestion server endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::SuggestionCache;
use crate::config::Config;
use crate::error::{ApiError, ProviderError, Result};
use crate::models::{AddressSuggestion, HealthResponse, StatsResponse, SuggestQuery};
use crate::provider::{AddressProvider, NominatimProvider};
use crate::suggest::AddressSuggestionService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Suggestion service, which owns the shared cache
    pub service: Arc<AddressSuggestionService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: AddressSuggestionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState with a fresh cache in front of `provider`.
    pub fn with_provider(provider: Arc<dyn AddressProvider>, config: &Config) -> Self {
        let cache = Arc::new(RwLock::new(SuggestionCache::new(config.cache_ttl)));
        Self::new(AddressSuggestionService::new(provider, cache))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the Nominatim client and an empty cache from the Config.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ProviderError> {
        let provider = NominatimProvider::from_config(config)?;
        Ok(Self::with_provider(Arc::new(provider), config))
    }

    /// Shared handle to the suggestion cache.
    pub fn cache(&self) -> Arc<RwLock<SuggestionCache>> {
        self.service.cache()
    }
}

/// Handler for GET /api/address-suggestions
///
/// Returns the suggestion list for `q` and `countryCode`. Provider
/// failures produce an empty list, not an error; a query string that does
/// not deserialize is a 400 like any other invalid input.
pub async fn suggestions_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<SuggestQuery>, QueryRejection>,
) -> Result<Json<Vec<AddressSuggestion>>> {
    let Query(query) = query?;
    if let Some(error_msg) = query.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let suggestions = state.service.suggest(&query.q, &query.country_code).await;

    Ok(Json(suggestions))
}

/// Handler for GET /stats
///
/// Returns cache and provider statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.stats().await;

    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
