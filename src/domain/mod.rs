//! Domain layer - Core business logic and entities

pub mod coach;
pub mod document;
pub mod error;
pub mod extract;
pub mod llm;

pub use coach::{
    DetailContent, IntentConfig, PillarStatus, PromptComposer, QueryIntent, UserContext,
    classify_intent,
};
pub use document::{
    CacheSnapshot, CacheStatus, Category, CategoryContent, CategoryStatus, DocumentFetcher,
    DocumentSource, SearchHit, StalePolicy,
};
pub use error::DomainError;
pub use extract::{ContentExtractor, ExtractorKind};
pub use llm::{CompletionOptions, CompletionProvider};
