//! Provider Module
//!
//! Outbound port to the external address-search service and its raw
//! response schema.

use async_trait::async_trait;

use crate::error::ProviderError;

mod nominatim;
mod types;

#[cfg(test)]
pub mod mock;

pub use nominatim::NominatimProvider;
pub use types::{RawAddress, RawPlace};

// == Public Constants ==
/// Maximum number of results requested from the provider
pub const RESULT_LIMIT: usize = 7;

// == Search Request ==
/// Parameters of a single provider lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Trimmed free-text query
    pub query: String,
    /// Lower-case ISO 3166-1 alpha-2 country filter
    pub country_code: String,
    /// Result cap
    pub limit: usize,
}

impl SearchRequest {
    /// Creates a request capped at [`RESULT_LIMIT`] results.
    pub fn new(query: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            country_code: country_code.into(),
            limit: RESULT_LIMIT,
        }
    }
}

// == Address Provider ==
/// Trait for address-search backends.
///
/// Implementations perform exactly one lookup per call, without retries.
#[async_trait]
pub trait AddressProvider: Send + Sync + std::fmt::Debug {
    /// Searches candidate addresses matching the request.
    ///
    /// # Errors
    /// - `ProviderError::Transport` - The request could not be sent or read
    /// - `ProviderError::Status` - The provider answered with a non-2xx status
    /// - `ProviderError::Decode` - The body did not match the expected schema
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RawPlace>, ProviderError>;
}
