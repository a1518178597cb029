//! HTTP routes for the Audio Token Service.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers;
use crate::middleware::http_metrics_middleware;
use crate::services::TokenIssuer;
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Config,

    /// Token issuer built from the configured signing credentials.
    pub issuer: TokenIssuer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let issuer = TokenIssuer::new(config.credentials.clone());
        Self { config, issuer }
    }
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `POST /api/audio/token` - Issue a room access token
/// - `POST /api/audio/initialize` - Issue a token for a new session (201)
/// - `DELETE /api/audio/terminate/:session_id` - Acknowledge termination
/// - `GET /api/health` - Liveness probe
/// - `GET /metrics` - Prometheus metrics endpoint
/// - TraceLayer for request logging
/// - 30 second request timeout
/// - Permissive CORS (any origin, method and header)
/// - HTTP metrics middleware
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let api_routes = Router::new()
        .route("/api/audio/token", post(handlers::create_token))
        .route("/api/audio/initialize", post(handlers::initialize_session))
        .route(
            "/api/audio/terminate/:session_id",
            delete(handlers::terminate_session),
        )
        .route("/api/health", get(handlers::health_check))
        .with_state(state);

    // Metrics route with its own state
    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    // Layer order (bottom-to-top execution):
    // 1. TimeoutLayer - Timeout the request (innermost)
    // 2. TraceLayer - Log request details
    // 3. CorsLayer - Answer preflights, add CORS headers
    // 4. http_metrics_middleware - Record ALL responses (outermost)
    // TODO: restrict CORS origins once the browser client's deployment origins are known
    api_routes
        .merge(metrics_routes)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(http_metrics_middleware))
}
