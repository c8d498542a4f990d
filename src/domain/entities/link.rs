//! Short link entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short link.
///
/// Created once by [`crate::domain::repositories::LinkRepository::save`] and
/// never modified afterwards. `code` is derived from `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, code: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            url,
            created_at,
        }
    }

    /// Builds the public short URL by appending the code to `prefix`.
    ///
    /// The prefix is used verbatim, so it normally ends with `/`.
    pub fn short_url(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.code)
    }
}
