use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::coach::IntentConfig;
use crate::domain::document::{Category, DocumentSource, StalePolicy};
use crate::domain::extract::ExtractorKind;
use crate::domain::llm::CompletionOptions;
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub documents: DocumentsConfig,
    pub coach: CoachConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// A single source id or a list, accepted interchangeably in config
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(id) => vec![id],
            OneOrMany::Many(ids) => ids,
        }
    }
}

/// Document store and cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Base URL of the remote document store
    pub store_base_url: String,
    /// Per-request timeout for document fetches, in seconds
    pub fetch_timeout_secs: u64,
    /// Cache time-to-live, in seconds
    pub refresh_ttl_secs: u64,
    pub stale_policy: StalePolicy,
    /// Category name -> source id(s); normalized by `document_sources`
    pub sources: HashMap<String, OneOrMany>,
    pub extraction: ExtractionConfig,
    pub search: SearchConfig,
}

impl DocumentsConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_ttl_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Normalize the configured sources into one canonical form:
    /// a flat list of `DocumentSource`, with the configured/unconfigured
    /// decision made here and never revisited downstream
    pub fn document_sources(&self) -> Result<Vec<DocumentSource>, DomainError> {
        let mut sources = Vec::new();

        for (name, ids) in &self.sources {
            let category = Category::from_str(name).map_err(|e| {
                DomainError::configuration(format!("documents.sources: {}", e))
            })?;

            for id in ids.clone().into_vec() {
                sources.push(DocumentSource::new(category, id));
            }
        }

        Ok(sources)
    }
}

/// Content extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub strategy: ExtractorKind,
    /// Heuristic extraction stops once output exceeds this many characters
    pub max_condensed_len: usize,
    /// Model summarization passes shorter texts through unchanged
    pub summarize_threshold: usize,
    /// At most this many characters are sent to the model for summarization
    pub summarize_input_cap: usize,
    /// Case-sensitive keywords marking heading-like lines
    pub marker_keywords: Vec<String>,
}

/// Naive search configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_hits_per_category: usize,
    pub max_guide_segments: usize,
}

/// Coaching endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub openai_base_url: Option<String>,
    pub intent: IntentConfig,
}

impl CoachConfig {
    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            store_base_url: "https://docs.google.com/document/d".to_string(),
            fetch_timeout_secs: 15,
            refresh_ttl_secs: 3600,
            stale_policy: StalePolicy::default(),
            sources: HashMap::new(),
            extraction: ExtractionConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strategy: ExtractorKind::default(),
            max_condensed_len: 4000,
            summarize_threshold: 3000,
            summarize_input_cap: 10_000,
            marker_keywords: ["Key", "Step", "Method", "Guide", "Blueprint", "Rule", "Principle"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_hits_per_category: 4,
            max_guide_segments: 10,
        }
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
            max_tokens: 800,
            openai_base_url: None,
            intent: IntentConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
