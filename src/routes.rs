//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /encode`       - Create a short link
//! - `GET  /info/{code}`  - Short link details
//! - `GET  /health`       - Storage health check
//! - `GET  /{code}`       - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin on `/encode`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path
/// normalization.
///
/// A request with the wrong method on a known path gets a 405 envelope.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::api_routes())
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed before
/// routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

async fn method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method)
}
