use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Options for a single completion call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        // Low temperature: coaching answers must reproduce document
        // content accurately rather than paraphrase it.
        Self {
            temperature: 0.3,
            max_tokens: 800,
        }
    }
}

/// Opaque text-completion capability
///
/// The only contract the rest of the system depends on: a system prompt
/// and a user message in, generated text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync + Debug {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        options: CompletionOptions,
    ) -> Result<String, DomainError>;

    fn provider_name(&self) -> &'static str;
}
