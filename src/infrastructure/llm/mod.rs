//! Completion provider implementations

mod openai;

use std::sync::Arc;
use std::time::Duration;

pub use openai::OpenAiCompletionProvider;
use tracing::info;

use crate::config::CoachConfig;
use crate::domain::llm::CompletionProvider;
use crate::infrastructure::http_client::HttpClient;

/// Per-request timeout for completion calls
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

/// Create the completion provider from configuration and environment
pub fn create_completion_provider(config: &CoachConfig) -> Arc<dyn CompletionProvider> {
    let api_key =
        std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| "sk-placeholder".to_string());

    let base_url = config
        .openai_base_url
        .clone()
        .or_else(|| std::env::var("OPENAI_BASE_URL").ok());

    match base_url {
        Some(url) => {
            info!("Using OpenAI provider with custom base URL: {}", url);
            Arc::new(OpenAiCompletionProvider::with_base_url(
                HttpClient::with_timeout(COMPLETION_TIMEOUT),
                api_key,
                config.model.clone(),
                url,
            ))
        }
        None => {
            info!("Using OpenAI provider with default base URL");
            Arc::new(OpenAiCompletionProvider::new(
                HttpClient::with_timeout(COMPLETION_TIMEOUT),
                api_key,
                config.model.clone(),
            ))
        }
    }
}
