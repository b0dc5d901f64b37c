//! API Module
//!
//! HTTP handlers and routing for the suggestion server REST API.
//!
//! # Endpoints
//! - `GET /api/address-suggestions` - Address suggestions for `q` and `countryCode`
//! - `GET /stats` - Cache and provider statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
