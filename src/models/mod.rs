//! Request and Response models for the suggestion API
//!
//! This module defines the value types and DTOs (Data Transfer Objects) used
//! for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod suggestion;

// Re-export commonly used types
pub use requests::SuggestQuery;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use suggestion::AddressSuggestion;
