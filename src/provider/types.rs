//! Raw provider payload
//!
//! Mirrors the subset of the Nominatim `jsonv2` search result that the
//! suggestion service reads. Unknown fields are ignored.

use serde::Deserialize;

/// One search result as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPlace {
    /// Latitude, kept as sent
    pub lat: String,
    /// Longitude, kept as sent
    pub lon: String,
    /// Structured address details (`addressdetails=1`)
    pub address: RawAddress,
}

/// Address details of a [`RawPlace`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAddress {
    pub road: Option<String>,
    pub pedestrian: Option<String>,
    pub house_number: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
}

impl RawPlace {
    /// Creates a place from coordinates and address details.
    pub fn new(lat: impl Into<String>, lon: impl Into<String>, address: RawAddress) -> Self {
        Self {
            lat: lat.into(),
            lon: lon.into(),
            address,
        }
    }
}
