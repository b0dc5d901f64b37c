//! Response DTOs for the suggestion API
//!
//! Defines the structure of outgoing HTTP response bodies. Suggestion lists
//! are serialized directly from [`AddressSuggestion`](super::AddressSuggestion).

use serde::Serialize;

use crate::suggest::ServiceStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of lookups sent to the provider
    pub provider_requests: u64,
    /// Lookups that degraded to an empty list
    pub provider_failures: u64,
    /// Current number of entries in cache, expired ones included
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from service statistics
    pub fn new(stats: &ServiceStats) -> Self {
        Self {
            hits: stats.cache.hits,
            misses: stats.cache.misses,
            provider_requests: stats.provider_requests,
            provider_failures: stats.provider_failures,
            total_entries: stats.cache.total_entries,
            hit_rate: stats.cache.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStats;

    fn service_stats(hits: u64, misses: u64) -> ServiceStats {
        ServiceStats {
            cache: CacheStats {
                hits,
                misses,
                total_entries: 3,
            },
            provider_requests: misses,
            provider_failures: 1,
        }
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let resp = StatsResponse::new(&service_stats(80, 20));
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.provider_requests, 20);
        assert_eq!(resp.provider_failures, 1);
        assert_eq!(resp.total_entries, 3);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(&service_stats(0, 0));
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
