//! Nominatim search client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{AddressProvider, RawPlace, SearchRequest};
use crate::config::Config;
use crate::error::ProviderError;

/// HTTP client for a Nominatim-compatible `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimProvider {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimProvider {
    /// Creates a provider for `base_url` (without the `/search` suffix).
    ///
    /// `timeout` bounds every outbound request at the transport level.
    ///
    /// # Errors
    ///
    /// - `ProviderError::Transport` - If the HTTP client cannot be built
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a provider from the server configuration.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Self::new(
            config.provider_url.clone(),
            &config.user_agent,
            config.provider_timeout,
        )
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl AddressProvider for NominatimProvider {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RawPlace>, ProviderError> {
        let limit = request.limit.to_string();

        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("format", "jsonv2"),
                ("addressdetails", "1"),
                ("limit", limit.as_str()),
                ("countrycodes", request.country_code.as_str()),
                ("q", request.query.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let places: Vec<RawPlace> = serde_json::from_slice(&body)?;

        debug!(
            "Provider returned {} places for '{}' ({})",
            places.len(),
            request.query,
            request.country_code
        );
        Ok(places)
    }
}
