//! DTOs for the info endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Full record of a short link, as exposed by `GET /info/{code}`.
#[derive(Debug, Serialize)]
pub struct LinkInfo {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkInfo {
    pub fn from_link(link: ShortLink, prefix: &str) -> Self {
        Self {
            short_url: link.short_url(prefix),
            id: link.id,
            code: link.code,
            url: link.url,
            created_at: link.created_at,
        }
    }
}
