//! Handler for the encode endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::encode::EncodeRequest;
use crate::api::dto::envelope::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a single URL.
///
/// # Endpoint
///
/// `POST /encode`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "response": "http://sho.rt/1" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an undecodable body or an invalid URL.
/// Returns 500 Internal Server Error if the link cannot be stored.
pub async fn encode_handler(
    State(state): State<AppState>,
    payload: Result<Json<EncodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<String>>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(format!(
            "Unable to decode JSON request body: {}",
            rejection.body_text()
        ))
    })?;

    let link = state.link_service.shorten(&payload.url).await?;
    let short_url = state.link_service.short_url(&link);

    tracing::info!(id = link.id, code = %link.code, "Created short link");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(short_url))))
}
