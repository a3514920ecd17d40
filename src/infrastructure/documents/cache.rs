//! Document cache with TTL-based, all-or-nothing refresh
//!
//! All categories are refreshed together in one cycle. The replacement
//! mapping is built completely off to the side and swapped in atomically,
//! so readers always observe either the previous snapshot or the new one,
//! never a mixture.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::domain::document::{
    CacheSnapshot, CacheStatus, Category, CategoryContent, DocumentFetcher, DocumentSource,
    StalePolicy, source_delimiter,
};
use crate::domain::extract::ContentExtractor;

/// Configuration for the document cache
#[derive(Debug, Clone)]
pub struct DocumentCacheConfig {
    /// How long a refresh cycle stays fresh
    pub ttl: Duration,
    /// What stale callers do while another task is refreshing
    pub stale_policy: StalePolicy,
}

impl Default for DocumentCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600),
            stale_policy: StalePolicy::Wait,
        }
    }
}

impl DocumentCacheConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }
}

/// Process-wide cache of fetched and condensed document content
///
/// Owned and injected through application state; the refresh critical
/// section is guarded so concurrent stale requests never run duplicate
/// fetch-and-condense passes.
pub struct DocumentCacheService {
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn ContentExtractor>,
    sources: Vec<DocumentSource>,
    config: DocumentCacheConfig,
    snapshot: RwLock<CacheSnapshot>,
    refresh_guard: Mutex<()>,
}

impl fmt::Debug for DocumentCacheService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentCacheService")
            .field("sources", &self.sources.len())
            .field("config", &self.config)
            .finish()
    }
}

impl DocumentCacheService {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        extractor: Arc<dyn ContentExtractor>,
        sources: Vec<DocumentSource>,
        config: DocumentCacheConfig,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            sources,
            config,
            snapshot: RwLock::new(CacheSnapshot::default()),
            refresh_guard: Mutex::new(()),
        }
    }

    /// Read-only snapshot of the current mapping; never triggers a refresh
    pub async fn snapshot(&self) -> CacheSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Per-category load status
    pub async fn status(&self) -> CacheStatus {
        self.snapshot.read().await.status()
    }

    /// Force the next `ensure_fresh` to refetch everything
    ///
    /// An in-flight refresh is not cancelled; it completes and installs
    /// its result with a fresh timestamp.
    pub async fn force_invalidate(&self) {
        self.snapshot.write().await.last_refreshed_at = None;
        info!("document cache invalidated");
    }

    /// Refresh the cache if it is empty or past its TTL, then return the
    /// current snapshot
    pub async fn ensure_fresh(&self) -> Result<CacheSnapshot, DomainError> {
        {
            let current = self.snapshot.read().await;
            if !current.is_stale(self.config.ttl, Utc::now()) {
                return Ok(current.clone());
            }
        }

        let _guard = match self.config.stale_policy {
            StalePolicy::Wait => self.refresh_guard.lock().await,
            StalePolicy::ServeStale => match self.refresh_guard.try_lock() {
                Ok(guard) => guard,
                Err(_) => {
                    debug!("refresh in progress, serving current snapshot");
                    return Ok(self.snapshot.read().await.clone());
                }
            },
        };

        // The refresh that held the guard before us may have already done
        // the work.
        {
            let current = self.snapshot.read().await;
            if !current.is_stale(self.config.ttl, Utc::now()) {
                return Ok(current.clone());
            }
        }

        let entries = self.refresh_all().await;
        let fresh = CacheSnapshot {
            entries,
            last_refreshed_at: Some(Utc::now()),
        };

        *self.snapshot.write().await = fresh.clone();
        info!(categories = fresh.entries.len(), "document cache refreshed");

        Ok(fresh)
    }

    /// One full refresh cycle over every configured category
    async fn refresh_all(&self) -> HashMap<Category, CategoryContent> {
        let mut entries = HashMap::new();

        for category in Category::ALL {
            let sources: Vec<&DocumentSource> = self
                .sources
                .iter()
                .filter(|s| s.category == category)
                .collect();

            if sources.is_empty() {
                continue;
            }

            entries.insert(category, self.refresh_category(category, &sources).await);
        }

        entries
    }

    async fn refresh_category(
        &self,
        category: Category,
        sources: &[&DocumentSource],
    ) -> CategoryContent {
        for source in sources.iter().filter(|s| !s.configured) {
            debug!(
                category = %category,
                document_id = %source.document_id,
                "source not configured, skipping"
            );
        }

        let fetches = sources.iter().filter(|s| s.configured).map(|source| {
            let document_id = source.document_id.clone();
            async move {
                match self.fetcher.fetch(&document_id).await {
                    Ok(text) => (document_id, text),
                    Err(e) => {
                        warn!(
                            category = %category,
                            document_id = %document_id,
                            error = %e,
                            "document fetch failed, source contributes nothing this cycle"
                        );
                        (document_id, String::new())
                    }
                }
            }
        });

        let mut raw_text = String::new();
        let mut document_count = 0;

        for (document_id, text) in join_all(fetches).await {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            if !raw_text.is_empty() {
                raw_text.push_str("\n\n");
            }
            raw_text.push_str(&source_delimiter(&document_id));
            raw_text.push_str("\n\n");
            raw_text.push_str(text);
            document_count += 1;
        }

        let condensed_text = if raw_text.is_empty() {
            String::new()
        } else {
            match self.extractor.condense(&raw_text, category).await {
                Ok(condensed) => condensed,
                Err(e) => {
                    warn!(
                        category = %category,
                        error = %e,
                        "content extraction failed, leaving condensed text empty"
                    );
                    String::new()
                }
            }
        };

        CategoryContent {
            raw_text,
            condensed_text,
            document_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::MockDocumentFetcher;
    use crate::domain::extract::mock::MockExtractor;
    use crate::infrastructure::extract::HeuristicExtractor;

    fn service_with(
        fetcher: MockDocumentFetcher,
        sources: Vec<DocumentSource>,
        config: DocumentCacheConfig,
    ) -> (Arc<DocumentCacheService>, Arc<MockDocumentFetcher>) {
        let fetcher = Arc::new(fetcher);
        let service = Arc::new(DocumentCacheService::new(
            fetcher.clone(),
            Arc::new(MockExtractor::new()),
            sources,
            config,
        ));
        (service, fetcher)
    }

    fn sources(pairs: &[(Category, &str)]) -> Vec<DocumentSource> {
        pairs
            .iter()
            .map(|&(category, id)| DocumentSource::new(category, id))
            .collect()
    }

    #[tokio::test]
    async fn test_first_ensure_fresh_populates_the_cache() {
        let fetcher = MockDocumentFetcher::new()
            .with_text("doc-f", "money text")
            .with_text("doc-h", "health text");
        let (service, _) = service_with(
            fetcher,
            sources(&[
                (Category::Financial, "doc-f"),
                (Category::Health, "doc-h"),
            ]),
            DocumentCacheConfig::default(),
        );

        let snapshot = service.ensure_fresh().await.unwrap();

        assert_eq!(snapshot.entries.len(), 2);
        assert!(snapshot.raw(Category::Financial).unwrap().contains("money text"));
        assert!(snapshot.raw(Category::Health).unwrap().contains("health text"));
        assert!(snapshot.last_refreshed_at.is_some());
    }

    #[tokio::test]
    async fn test_no_fetches_within_ttl() {
        let fetcher = MockDocumentFetcher::new().with_text("doc-f", "text");
        let (service, fetcher) = service_with(
            fetcher,
            sources(&[(Category::Financial, "doc-f")]),
            DocumentCacheConfig::default(),
        );

        service.ensure_fresh().await.unwrap();
        assert_eq!(fetcher.fetch_count(), 1);

        for _ in 0..5 {
            service.ensure_fresh().await.unwrap();
        }
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_refresh_after_ttl_elapses() {
        let fetcher = MockDocumentFetcher::new().with_text("doc-f", "text");
        let (service, fetcher) = service_with(
            fetcher,
            sources(&[(Category::Financial, "doc-f")]),
            DocumentCacheConfig::default().with_ttl(Duration::from_millis(30)),
        );

        service.ensure_fresh().await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        service.ensure_fresh().await.unwrap();

        assert_eq!(fetcher.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_stale_callers_trigger_exactly_one_refresh() {
        let fetcher = MockDocumentFetcher::new()
            .with_text("doc-f", "text")
            .with_delay(Duration::from_millis(40));
        let (service, fetcher) = service_with(
            fetcher,
            sources(&[(Category::Financial, "doc-f")]),
            DocumentCacheConfig::default(),
        );

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.ensure_fresh().await.unwrap() })
            })
            .collect();

        for task in tasks {
            let snapshot = task.await.unwrap();
            assert!(!snapshot.is_empty());
        }

        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_serve_stale_policy_does_not_wait_for_the_refresh() {
        let fetcher = MockDocumentFetcher::new()
            .with_text("doc-f", "text")
            .with_delay(Duration::from_millis(100));
        let (service, _) = service_with(
            fetcher,
            sources(&[(Category::Financial, "doc-f")]),
            DocumentCacheConfig::default().with_stale_policy(StalePolicy::ServeStale),
        );

        let refresher = {
            let service = service.clone();
            tokio::spawn(async move { service.ensure_fresh().await.unwrap() })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Refresh is mid-flight; this caller gets the current (empty)
        // snapshot immediately instead of waiting.
        let stale = service.ensure_fresh().await.unwrap();
        assert!(stale.is_empty());

        let fresh = refresher.await.unwrap();
        assert!(!fresh.is_empty());
    }

    #[tokio::test]
    async fn test_one_failing_source_does_not_corrupt_the_category() {
        let fetcher = MockDocumentFetcher::new()
            .with_text("doc-ok", "1. Find a niche\n2. Test products")
            .with_error("doc-broken", "HTTP 500");
        let (service, _) = service_with(
            fetcher,
            sources(&[
                (Category::Financial, "doc-ok"),
                (Category::Financial, "doc-broken"),
            ]),
            DocumentCacheConfig::default(),
        );

        let snapshot = service.ensure_fresh().await.unwrap();
        let content = snapshot.entries.get(&Category::Financial).unwrap();

        // Exactly the surviving source's contribution, nothing else.
        assert_eq!(
            content.raw_text,
            format!(
                "{}\n\n1. Find a niche\n2. Test products",
                source_delimiter("doc-ok")
            )
        );
        assert_eq!(content.document_count, 1);
    }

    #[tokio::test]
    async fn test_unconfigured_sources_are_never_fetched() {
        let fetcher = MockDocumentFetcher::new().with_text("doc-real", "text");
        let (service, fetcher) = service_with(
            fetcher,
            sources(&[
                (Category::Growth, "doc-real"),
                (Category::Growth, "YOUR_DOC_ID"),
            ]),
            DocumentCacheConfig::default(),
        );

        service.ensure_fresh().await.unwrap();

        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_force_invalidate_triggers_a_full_refetch() {
        let fetcher = MockDocumentFetcher::new().with_text("doc-f", "text");
        let (service, fetcher) = service_with(
            fetcher,
            sources(&[(Category::Financial, "doc-f")]),
            DocumentCacheConfig::default(),
        );

        service.ensure_fresh().await.unwrap();
        service.force_invalidate().await;
        service.ensure_fresh().await.unwrap();

        assert_eq!(fetcher.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_condensed_text_is_always_derived_from_current_raw_text() {
        let fetcher = MockDocumentFetcher::new()
            .with_text("doc-f", "financial body")
            .with_text("doc-p", "purpose body")
            .with_delay(Duration::from_millis(10));
        let (service, _) = service_with(
            fetcher,
            sources(&[
                (Category::Financial, "doc-f"),
                (Category::Purpose, "doc-p"),
            ]),
            DocumentCacheConfig::default(),
        );

        let refresher = {
            let service = service.clone();
            tokio::spawn(async move { service.ensure_fresh().await.unwrap() })
        };

        // Readers racing the refresh must only ever see pairs where the
        // condensed text was derived from the raw text they observe.
        for _ in 0..40 {
            let snapshot = service.snapshot().await;
            for content in snapshot.entries.values() {
                assert_eq!(
                    content.condensed_text,
                    MockExtractor::derive(&content.raw_text)
                );
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        refresher.await.unwrap();

        let snapshot = service.snapshot().await;
        for content in snapshot.entries.values() {
            assert_eq!(
                content.condensed_text,
                MockExtractor::derive(&content.raw_text)
            );
        }
    }

    #[tokio::test]
    async fn test_status_reflects_loaded_categories() {
        let fetcher = MockDocumentFetcher::new().with_text("doc-f", "money text");
        let (service, _) = service_with(
            fetcher,
            sources(&[(Category::Financial, "doc-f")]),
            DocumentCacheConfig::default(),
        );

        let before = service.status().await;
        assert!(before.categories.iter().all(|c| !c.loaded));
        assert!(before.last_refreshed_at.is_none());

        service.ensure_fresh().await.unwrap();

        let after = service.status().await;
        let financial = after
            .categories
            .iter()
            .find(|c| c.category == Category::Financial)
            .unwrap();
        assert!(financial.loaded);
        assert_eq!(financial.document_count, 1);
        assert!(after.last_refreshed_at.is_some());
    }

    #[tokio::test]
    async fn test_heuristic_end_to_end_with_one_empty_source() {
        let fetcher = MockDocumentFetcher::new()
            .with_text(
                "doc-ok",
                "1. Find a niche\nPick something you understand.\n2. Validate demand\nRun small ads.",
            )
            .with_text("doc-empty", "");
        let fetcher = Arc::new(fetcher);
        let service = DocumentCacheService::new(
            fetcher.clone(),
            Arc::new(HeuristicExtractor::default()),
            sources(&[
                (Category::Financial, "doc-ok"),
                (Category::Financial, "doc-empty"),
            ]),
            DocumentCacheConfig::default(),
        );

        let snapshot = service.ensure_fresh().await.unwrap();
        let content = snapshot.entries.get(&Category::Financial).unwrap();

        assert!(content.raw_text.contains("1. Find a niche"));
        assert!(!content.raw_text.contains("doc-empty"));
        assert!(content.condensed_text.starts_with("1. Find a niche"));
        assert_eq!(content.document_count, 1);
    }
}
