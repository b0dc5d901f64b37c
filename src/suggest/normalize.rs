//! Raw place normalization
//!
//! Turns provider results into [`AddressSuggestion`]s.

use crate::models::AddressSuggestion;
use crate::provider::RawPlace;

/// Maps a raw place to a suggestion.
///
/// Returns `None` when the place has no street, postcode or city. Blank
/// provider fields count as absent. `country_code` is copied as given.
pub fn normalize(place: &RawPlace, country_code: &str) -> Option<AddressSuggestion> {
    let address = &place.address;

    let street = first_present(&[&address.road, &address.pedestrian])?;
    let postal_code = first_present(&[&address.postcode])?;
    let city = first_present(&[
        &address.city,
        &address.town,
        &address.village,
        &address.hamlet,
    ])?;
    let house_number = first_present(&[&address.house_number]).unwrap_or_default();

    Some(AddressSuggestion {
        label: format_label(&street, &house_number, &postal_code, &city),
        street,
        house_number,
        postal_code,
        city,
        country_code: country_code.to_string(),
        lat: place.lat.clone(),
        lon: place.lon.clone(),
    })
}

/// `"{street} {houseNumber}, {postalCode} {city}"`, without the house
/// number part when it is empty.
pub fn format_label(street: &str, house_number: &str, postal_code: &str, city: &str) -> String {
    if house_number.is_empty() {
        format!("{}, {} {}", street, postal_code, city)
    } else {
        format!("{} {}, {} {}", street, house_number, postal_code, city)
    }
}

fn first_present(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|field| field.as_deref())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
