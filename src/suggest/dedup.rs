//! Suggestion deduplication

use std::collections::HashSet;

use crate::models::AddressSuggestion;

/// Drops suggestions whose [`dedup_key`](AddressSuggestion::dedup_key) was
/// already seen. The first occurrence wins and order is preserved.
pub fn dedup(suggestions: Vec<AddressSuggestion>) -> Vec<AddressSuggestion> {
    let mut seen = HashSet::with_capacity(suggestions.len());

    suggestions
        .into_iter()
        .filter(|suggestion| seen.insert(suggestion.dedup_key()))
        .collect()
}
