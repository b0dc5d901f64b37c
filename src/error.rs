//! Error types for the suggestion server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Provider Error Enum ==
/// Why a provider lookup failed.
///
/// Never surfaced by the suggestion service; it is logged and the lookup
/// degrades to an empty list.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Request could not be built, sent or read
    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider responded with status {0}")]
    Status(u16),

    /// Body did not match the expected schema
    #[error("Unexpected provider payload: {0}")]
    Decode(#[from] serde_json::Error),
}

// == API Error Enum ==
/// Error type of the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;
