//! Model-assisted summarization
//!
//! Short texts pass through unchanged. Longer texts are condensed by the
//! completion capability; when it is unavailable the extractor falls
//! back to a truncated prefix so the refresh cycle never aborts.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::DomainError;
use crate::domain::document::Category;
use crate::domain::extract::ContentExtractor;
use crate::domain::llm::{CompletionOptions, CompletionProvider};

/// Marker appended to fallback output when summarization fails
const TRUNCATION_MARKER: &str = "[content truncated]";

/// Configuration for model-assisted summarization
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Texts shorter than this are returned unchanged
    pub threshold: usize,
    /// At most this many characters are sent to the model
    pub input_cap: usize,
    pub options: CompletionOptions,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            threshold: 3000,
            input_cap: 10_000,
            options: CompletionOptions {
                temperature: 0.3,
                max_tokens: 600,
            },
        }
    }
}

/// Extractor that asks the completion capability for key points
#[derive(Debug)]
pub struct ModelSummarizer {
    provider: Arc<dyn CompletionProvider>,
    config: SummarizerConfig,
}

impl ModelSummarizer {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: SummarizerConfig) -> Self {
        Self { provider, config }
    }

    fn instruction(category: Category) -> String {
        format!(
            "Extract the key actionable points from the following {} document. \
             Keep numbered steps, specific tools, and percentages intact. \
             Respond with the extracted points only.",
            category
        )
    }
}

#[async_trait]
impl ContentExtractor for ModelSummarizer {
    async fn condense(&self, raw_text: &str, category: Category) -> Result<String, DomainError> {
        if raw_text.chars().count() < self.config.threshold {
            return Ok(raw_text.to_string());
        }

        let input: String = raw_text.chars().take(self.config.input_cap).collect();

        match self
            .provider
            .complete(&Self::instruction(category), &input, self.config.options)
            .await
        {
            Ok(summary) => Ok(summary),
            Err(e) => {
                warn!(
                    category = %category,
                    error = %e,
                    "summarization failed, falling back to truncated text"
                );

                let prefix: String = raw_text.chars().take(self.config.threshold).collect();
                Ok(format!("{}\n\n{}", prefix.trim_end(), TRUNCATION_MARKER))
            }
        }
    }

    fn name(&self) -> &'static str {
        "model"
    }
}
