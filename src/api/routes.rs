//! API route configuration.

use crate::api::handlers::{encode_handler, info_handler};
use crate::api::middleware::cors;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link API routes.
///
/// # Endpoints
///
/// - `POST /encode`       - Shorten a URL (CORS: any origin)
/// - `GET  /info/{code}`  - Full record for a code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler).layer(cors::layer()))
        .route("/info/{code}", get(info_handler))
}
