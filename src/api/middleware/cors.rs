//! Cross-origin policy for the encode endpoint.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to `POST` JSON to `/encode`.
///
/// Browser clients on other sites (bookmarklets, extensions) call the
/// encode endpoint directly, so the response carries
/// `Access-Control-Allow-Origin: *`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
