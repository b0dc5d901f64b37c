//! Request DTOs for the suggestion API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Minimum number of characters (after trimming) a query must have
pub const MIN_QUERY_LENGTH: usize = 3;

/// Query string for GET /api/address-suggestions
///
/// # Fields
/// - `q`: Free-text address fragment typed by the user
/// - `countryCode`: ISO 3166-1 alpha-2 country filter (`country` is accepted too)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestQuery {
    /// Free-text query
    #[serde(default)]
    pub q: String,
    /// Two-letter country code, any case
    #[serde(default, rename = "countryCode", alias = "country")]
    pub country_code: String,
}

impl SuggestQuery {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.q.trim().chars().count() < MIN_QUERY_LENGTH {
            return Some(format!(
                "Query must contain at least {} characters",
                MIN_QUERY_LENGTH
            ));
        }
        let country_code = self.country_code.trim();
        if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Some("Country code must be a two-letter ISO code".to_string());
        }
        None
    }
}
