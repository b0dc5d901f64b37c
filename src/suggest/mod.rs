//! Suggestion Module
//!
//! The address-suggestion flow: normalization of provider results,
//! deduplication and the caching service that ties them together.

mod dedup;
mod normalize;
mod service;


pub use dedup::dedup;
pub use normalize::{format_label, normalize};
pub use service::{AddressSuggestionService, ServiceStats};
