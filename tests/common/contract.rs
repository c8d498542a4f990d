//! Behaviour every storage backend must share.

use std::collections::HashSet;
use std::sync::Arc;

use shortlink::domain::repositories::{LinkRepository, StorageError};
use tokio::task::JoinSet;

pub async fn save_then_load(repo: &dyn LinkRepository) {
    let saved = repo.save("https://example.com/a").await.unwrap();
    let loaded = repo.load(&saved.code).await.unwrap();

    assert_eq!(loaded.url, "https://example.com/a");
    assert_eq!(loaded.code, saved.code);
}

pub async fn consecutive_saves_get_distinct_codes(repo: &dyn LinkRepository) {
    let first = repo.save("https://example.com/a").await.unwrap();
    let second = repo.save("https://example.com/b").await.unwrap();

    assert_ne!(first.code, second.code);
    assert!(second.id > first.id);
}

pub async fn unknown_code_is_not_found(repo: &dyn LinkRepository) {
    assert_eq!(
        repo.load("doesnotexist").await,
        Err(StorageError::not_found("doesnotexist"))
    );
    assert_eq!(
        repo.load_info("doesnotexist").await,
        Err(StorageError::not_found("doesnotexist"))
    );
}

pub async fn load_info_returns_full_record(repo: &dyn LinkRepository) {
    let saved = repo.save("https://example.com/a").await.unwrap();
    let info = repo.load_info(&saved.code).await.unwrap();

    assert_eq!(info.id, saved.id);
    assert_eq!(info.code, saved.code);
    assert_eq!(info.url, "https://example.com/a");
    assert_eq!(info.created_at, saved.created_at);
}

pub async fn empty_url_is_rejected(repo: &dyn LinkRepository) {
    for url in ["", "   ", "\n\t"] {
        assert!(matches!(
            repo.save(url).await,
            Err(StorageError::Validation(_))
        ));
    }
}

pub async fn records_are_immutable(repo: &dyn LinkRepository) {
    let saved = repo.save("https://example.com/keep").await.unwrap();

    for i in 0..5 {
        repo.save(&format!("https://example.com/other/{i}"))
            .await
            .unwrap();
        let loaded = repo.load(&saved.code).await.unwrap();
        assert_eq!(loaded, saved);
    }
}

pub async fn concurrent_saves_are_unique(repo: Arc<dyn LinkRepository>) {
    let mut tasks = JoinSet::new();
    for i in 0..100 {
        let repo = repo.clone();
        tasks.spawn(async move {
            let url = format!("https://example.com/page/{i}");
            let link = repo.save(&url).await.unwrap();
            (link, url)
        });
    }

    let mut codes = HashSet::new();
    while let Some(joined) = tasks.join_next().await {
        let (link, url) = joined.unwrap();
        assert_eq!(repo.load(&link.code).await.unwrap().url, url);
        assert!(codes.insert(link.code), "duplicate code handed out");
    }

    assert_eq!(codes.len(), 100);
}

pub async fn closed_backend_fails_fast(repo: &dyn LinkRepository) {
    let saved = repo.save("https://example.com").await.unwrap();

    repo.close().await.unwrap();
    repo.close().await.unwrap();

    assert_eq!(repo.save("https://example.com").await, Err(StorageError::Closed));
    assert_eq!(repo.load(&saved.code).await, Err(StorageError::Closed));
    assert_eq!(repo.load_info(&saved.code).await, Err(StorageError::Closed));
}
