//! Address Suggestion Model
//!
//! The normalized value returned to callers of the suggestion service.

use serde::{Deserialize, Serialize};

// == Address Suggestion ==
/// A normalized postal address candidate.
///
/// Has no identity beyond its field values. `lat` and `lon` are kept as the
/// provider sent them so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSuggestion {
    /// Display string, e.g. `Sonnenallee 10, 12045 Berlin`
    pub label: String,
    pub street: String,
    /// Empty when the provider knows no house number
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
    /// ISO 3166-1 alpha-2, uppercase
    pub country_code: String,
    pub lat: String,
    pub lon: String,
}

impl AddressSuggestion {
    // == Dedup Key ==
    /// Returns the key used to collapse near-identical suggestions.
    ///
    /// Lower-cased, trimmed (country, postal code, city, street, house number)
    /// joined with `|`.
    pub fn dedup_key(&self) -> String {
        [
            &self.country_code,
            &self.postal_code,
            &self.city,
            &self.street,
            &self.house_number,
        ]
        .iter()
        .map(|part| part.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("|")
    }
}
