//! Link creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StorageError};
use crate::error::{AppError, NOT_FOUND_MESSAGE};
use crate::utils::code_generator::is_valid_code;
use crate::utils::url_validator::validate_url;

/// Service for creating and resolving short links.
///
/// Owns input validation and short URL construction; persistence and code
/// derivation are delegated to the injected [`LinkRepository`].
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    base_prefix: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_prefix` is prepended verbatim to codes when building short URLs.
    pub fn new(repository: Arc<dyn LinkRepository>, base_prefix: impl Into<String>) -> Self {
        Self {
            repository,
            base_prefix: base_prefix.into(),
        }
    }

    /// Validates `raw_url` and stores it under a new code.
    ///
    /// The URL is trimmed before validation and stored exactly as trimmed.
    /// Every call creates a new record, even for a URL seen before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, too long, not
    /// absolute, or not http(s).
    /// Returns [`AppError::Internal`] if the storage write fails.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        let url = validate_url(raw_url).map_err(|e| AppError::bad_request(e.to_string()))?;

        self.repository.save(&url).await.map_err(|err| match err {
            StorageError::Validation(message) => AppError::bad_request(message),
            other => AppError::internal(format!("Could not store in database: {other}")),
        })
    }

    /// Resolves a code for redirecting.
    ///
    /// Codes that no sequence id could have produced are answered without
    /// touching storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }
        Ok(self.repository.load(code).await?)
    }

    /// Resolves a code to its full record.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn inspect(&self, code: &str) -> Result<ShortLink, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }
        Ok(self.repository.load_info(code).await?)
    }

    /// Builds the public short URL for `link`.
    pub fn short_url(&self, link: &ShortLink) -> String {
        link.short_url(&self.base_prefix)
    }

    pub fn base_prefix(&self) -> &str {
        &self.base_prefix
    }

    /// Probes the storage backend.
    pub async fn storage_health(&self) -> Result<(), StorageError> {
        self.repository.health_check().await
    }

    pub fn storage_backend(&self) -> &'static str {
        self.repository.backend_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: i64, code: &str, url: &str) -> ShortLink {
        ShortLink::new(id, code.to_string(), url.to_string(), Utc::now())
    }

    fn service(mock: MockLinkRepository) -> LinkService {
        LinkService::new(Arc::new(mock), "https://sho.rt/")
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_repo = MockLinkRepository::new();

        let created = create_test_link(10, "A", "https://example.com");
        mock_repo
            .expect_save()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = service(mock_repo);
        let link = service.shorten("https://example.com").await.unwrap();

        assert_eq!(link.code, "A");
        assert_eq!(service.short_url(&link), "https://sho.rt/A");
    }

    #[tokio::test]
    async fn test_shorten_trims_before_saving() {
        let mut mock_repo = MockLinkRepository::new();

        let created = create_test_link(1, "1", "https://example.com/path");
        mock_repo
            .expect_save()
            .withf(|url| url == "https://example.com/path")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = service(mock_repo);
        assert!(service.shorten("   https://example.com/path\n").await.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_empty_url_never_reaches_storage() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_save().times(0);

        let service = service(mock_repo);

        for input in ["", "   ", "\t\n"] {
            let err = service.shorten(input).await.unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
            assert_eq!(err.message(), "URL is Empty");
        }
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_save().times(0);

        let service = service(mock_repo);
        let err = service.shorten("not-a-url").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_storage_failure_is_internal() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(StorageError::Unavailable("connection reset".into())));

        let service = service(mock_repo);
        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.message().starts_with("Could not store in database"));
        assert!(err.message().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockLinkRepository::new();

        let link = create_test_link(5, "5", "https://example.com/a");
        mock_repo
            .expect_load()
            .withf(|code| code == "5")
            .times(1)
            .returning(move |_| Ok(link.clone()));

        let service = service(mock_repo);
        let resolved = service.resolve("5").await.unwrap();

        assert_eq!(resolved.url, "https://example.com/a");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_load()
            .times(1)
            .returning(|code| Err(StorageError::not_found(code)));

        let service = service(mock_repo);
        let err = service.resolve("zzzz").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_malformed_code_never_reaches_storage() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_load().times(0);
        mock_repo.expect_load_info().times(0);

        let service = service(mock_repo);

        for code in ["", "a-b", "007", "zzzzzzzzzzzz", "%20"] {
            let err = service.resolve(code).await.unwrap_err();
            assert_eq!(err.message(), NOT_FOUND_MESSAGE);
            assert!(service.inspect(code).await.is_err());
        }
    }

    #[tokio::test]
    async fn test_inspect_uses_load_info() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_load().times(0);

        let link = create_test_link(7, "7", "https://example.com/info");
        mock_repo
            .expect_load_info()
            .times(1)
            .returning(move |_| Ok(link.clone()));

        let service = service(mock_repo);
        let info = service.inspect("7").await.unwrap();

        assert_eq!(info.id, 7);
        assert_eq!(info.code, "7");
    }

    #[tokio::test]
    async fn test_closed_storage_is_internal() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_load()
            .times(1)
            .returning(|_| Err(StorageError::Closed));

        let service = service(mock_repo);
        let err = service.resolve("1").await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }
}
