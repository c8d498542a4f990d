//! DTOs for the encode endpoint.

use serde::Deserialize;

/// Request to shorten a single URL.
///
/// Both `url` and `URL` are accepted as the field name.
#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    /// Raw URL as submitted; trimmed and checked by the link service.
    #[serde(alias = "URL", alias = "Url")]
    pub url: String,
}
