//! API Routes
//!
//! Configures the Axum router with all suggestion server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, stats_handler, suggestions_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/address-suggestions?q=..&countryCode=..` - Address suggestions
/// - `GET /stats` - Cache and provider statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, the autocomplete is called from the browser
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/address-suggestions", get(suggestions_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::provider::mock::{place, MockProvider};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let provider = Arc::new(MockProvider::with_places(vec![place(
            "Sonnenallee",
            "10",
            "12045",
            "Berlin",
        )]));
        create_router(AppState::with_provider(provider, &Config::default()))
    }

    async fn get_status(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(get_status("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(get_status("/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_suggestions_endpoint() {
        assert_eq!(
            get_status("/api/address-suggestions?q=Sonnenallee%2010&countryCode=de").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_suggestions_endpoint_missing_params() {
        assert_eq!(
            get_status("/api/address-suggestions").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_suggestions_endpoint_duplicate_param_is_json_error() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/address-suggestions?q=abc&q=def&countryCode=de")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].as_str().unwrap().contains("duplicate field"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(get_status("/get/key").await, StatusCode::NOT_FOUND);
    }
}
