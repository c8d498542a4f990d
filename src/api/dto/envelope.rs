//! The `{success, response}` envelope shared by every JSON response.

use serde::Serialize;

/// Uniform response wrapper.
///
/// `response` carries the payload on success and the error message on
/// failure. Field order is not significant to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub response: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(response: T) -> Self {
        Self {
            success: true,
            response,
        }
    }
}

impl ApiResponse<String> {
    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            response: message,
        }
    }
}
