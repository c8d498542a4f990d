//! Handler for the info endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::info::LinkInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record behind a code.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// # Errors
///
/// Returns 404 Not Found with `"URL Not Found"` for unknown codes.
pub async fn info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LinkInfo>>, AppError> {
    let service = &state.link_service;
    let link = service.inspect(&code).await?;

    Ok(Json(ApiResponse::ok(LinkInfo::from_link(
        link,
        service.base_prefix(),
    ))))
}
