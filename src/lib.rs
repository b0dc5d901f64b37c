//! Address Suggest - address autocomplete backend
//!
//! Looks up free-text address fragments at an external search provider,
//! normalizes and deduplicates the candidates and caches each result list
//! for a short time.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod suggest;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use suggest::AddressSuggestionService;
pub use tasks::spawn_cleanup_task;
