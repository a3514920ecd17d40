//! Balance Coach API
//!
//! A backend service producing document-grounded coaching responses:
//! - Fetches external documents per life-domain category
//! - Condenses and caches them with time-based invalidation
//! - Runs naive keyword search over the cached text
//! - Composes a single prompt for the completion capability

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::document::DocumentFetcher;
use domain::extract::{ContentExtractor, ExtractorKind};
use infrastructure::documents::{DocumentCacheConfig, DocumentCacheService, HttpDocumentFetcher};
use infrastructure::extract::{
    HeuristicConfig, HeuristicExtractor, ModelSummarizer, SummarizerConfig,
};
use infrastructure::http_client::HttpClient;
use infrastructure::llm::create_completion_provider;
use infrastructure::services::CoachService;
use tracing::info;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let completion = create_completion_provider(&config.coach);

    let fetcher: Arc<dyn DocumentFetcher> = Arc::new(HttpDocumentFetcher::new(
        HttpClient::with_timeout(config.documents.fetch_timeout()),
        config.documents.store_base_url.clone(),
    ));

    let extraction = &config.documents.extraction;
    let extractor: Arc<dyn ContentExtractor> = match extraction.strategy {
        ExtractorKind::Heuristic => Arc::new(HeuristicExtractor::new(HeuristicConfig {
            max_condensed_len: extraction.max_condensed_len,
            marker_keywords: extraction.marker_keywords.clone(),
        })),
        ExtractorKind::Model => Arc::new(ModelSummarizer::new(
            completion.clone(),
            SummarizerConfig {
                threshold: extraction.summarize_threshold,
                input_cap: extraction.summarize_input_cap,
                ..SummarizerConfig::default()
            },
        )),
    };
    info!("Content extraction strategy: {}", extractor.name());

    let sources = config.documents.document_sources()?;
    let configured = sources.iter().filter(|s| s.configured).count();
    info!(
        sources = sources.len(),
        configured, "Document sources loaded"
    );

    let cache = Arc::new(DocumentCacheService::new(
        fetcher,
        extractor,
        sources,
        DocumentCacheConfig::default()
            .with_ttl(config.documents.ttl())
            .with_stale_policy(config.documents.stale_policy),
    ));

    let coach_service = Arc::new(CoachService::new(
        cache.clone(),
        completion,
        config.coach.completion_options(),
        config.coach.intent.clone(),
        config.documents.search.clone(),
    ));

    Ok(AppState::new(
        coach_service,
        cache,
        config.documents.search.clone(),
    ))
}
