//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;

/// Public Nominatim instance used when `PROVIDER_URL` is unset
pub const DEFAULT_PROVIDER_URL: &str = "https://nominatim.openstreetmap.org";

/// Largest accepted `CACHE_TTL`, larger values fall back to the default
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the address-search provider
    pub provider_url: String,
    /// User-Agent sent with every provider request
    pub user_agent: String,
    /// Transport timeout for provider requests
    pub provider_timeout: Duration,
    /// Lifetime of cached suggestion lists
    pub cache_ttl: Duration,
    /// Interval of the expired-entry sweeper, None = disabled
    pub cleanup_interval: Option<Duration>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PROVIDER_URL` - Provider base URL (default: public Nominatim)
    /// - `USER_AGENT` - Outbound User-Agent (default: `address_suggest/<version>`)
    /// - `PROVIDER_TIMEOUT` - Provider timeout in seconds (default: 10)
    /// - `CACHE_TTL` - Suggestion TTL in seconds, at most one day (default: 60)
    /// - `CLEANUP_INTERVAL` - Sweeper interval in seconds, 0 disables it (default: 0)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            provider_url: env::var("PROVIDER_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.provider_url),
            user_agent: env::var("USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            provider_timeout: parse_var("PROVIDER_TIMEOUT")
                .map(Duration::from_secs)
                .unwrap_or(defaults.provider_timeout),
            cache_ttl: parse_var("CACHE_TTL")
                .map(Duration::from_secs)
                .filter(|ttl| *ttl <= MAX_CACHE_TTL)
                .unwrap_or(defaults.cache_ttl),
            cleanup_interval: match parse_var::<u64>("CLEANUP_INTERVAL") {
                Some(0) => None,
                Some(secs) => Some(Duration::from_secs(secs)),
                None => defaults.cleanup_interval,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            user_agent: format!("address_suggest/{}", env!("CARGO_PKG_VERSION")),
            provider_timeout: Duration::from_secs(10),
            cache_ttl: DEFAULT_TTL,
            cleanup_interval: None,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
