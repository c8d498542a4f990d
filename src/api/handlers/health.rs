//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

type HealthReply = (StatusCode, Json<ApiResponse<HealthResponse>>);

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Storage reachable
/// - **503 Service Unavailable**: Storage closed or unreachable
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "response": {
///     "status": "healthy",
///     "version": "0.1.0",
///     "checks": {
///       "storage": { "status": "ok", "message": "postgres" }
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> HealthReply {
    let storage_check = check_storage(&state).await;
    let healthy = storage_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
        },
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse {
            success: healthy,
            response,
        }),
    )
}

/// Probes the storage backend.
async fn check_storage(state: &AppState) -> CheckStatus {
    let backend = state.link_service.storage_backend();

    match state.link_service.storage_health().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some(backend.to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{backend}: {e}")),
        },
    }
}
