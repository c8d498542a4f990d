//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `301 Moved Permanently`; a code never changes its target,
/// so clients may cache the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if storage is unreachable or the stored
/// URL is not a valid header value.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(link.url.as_str()).map_err(|e| {
        AppError::internal(format!("Stored URL for {code} is not a valid Location: {e}"))
    })?;

    debug!("Redirecting {} to {}", code, link.url);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
