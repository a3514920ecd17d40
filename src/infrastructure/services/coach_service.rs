//! Coach service - orchestrates one coaching request end to end
//!
//! Control flow: validate, ensure the document cache is fresh, classify
//! the query intent, run detail-mode search when warranted, compose the
//! system prompt, and call the completion capability. Failures inside
//! the refresh pipeline degrade to partial content; only the final
//! completion call surfaces an error to the caller.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::domain::DomainError;
use crate::domain::coach::{
    DetailContent, IntentConfig, PromptComposer, QueryIntent, UserContext, classify_intent,
};
use crate::domain::document::search::{search, structured_segments};
use crate::domain::llm::{CompletionOptions, CompletionProvider};
use crate::infrastructure::documents::DocumentCacheService;

pub struct CoachService {
    cache: Arc<DocumentCacheService>,
    completion: Arc<dyn CompletionProvider>,
    composer: PromptComposer,
    options: CompletionOptions,
    intent_config: IntentConfig,
    search_config: SearchConfig,
}

impl fmt::Debug for CoachService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoachService").finish()
    }
}

impl CoachService {
    pub fn new(
        cache: Arc<DocumentCacheService>,
        completion: Arc<dyn CompletionProvider>,
        options: CompletionOptions,
        intent_config: IntentConfig,
        search_config: SearchConfig,
    ) -> Self {
        Self {
            cache,
            completion,
            composer: PromptComposer::new(),
            options,
            intent_config,
            search_config,
        }
    }

    /// Produce a coaching response for one request
    pub async fn respond(
        &self,
        message: &str,
        context: &UserContext,
    ) -> Result<String, DomainError> {
        if message.trim().is_empty() {
            return Err(DomainError::validation("message must not be empty"));
        }
        context.validate()?;

        let snapshot = self.cache.ensure_fresh().await?;

        let intent = classify_intent(message, &self.intent_config);
        debug!(intent = ?intent, "classified coaching query");

        let detail = if intent.wants_detail() {
            self.gather_detail(message, intent, &snapshot)
        } else {
            DetailContent::default()
        };

        let system_prompt = self.composer.compose(&snapshot, &detail, context);
        info!(
            prompt_chars = system_prompt.chars().count(),
            detail_mode = intent.wants_detail(),
            "submitting coaching prompt"
        );

        self.completion
            .complete(&system_prompt, message, self.options)
            .await
    }

    fn gather_detail(
        &self,
        message: &str,
        intent: QueryIntent,
        snapshot: &crate::domain::document::CacheSnapshot,
    ) -> DetailContent {
        let search_hits = search(
            snapshot,
            message,
            None,
            self.search_config.max_hits_per_category,
        );

        // Guide-seeking queries rarely quote the document text they are
        // after, so numbered procedural segments are surfaced as well.
        let structured_guides = match intent {
            QueryIntent::Procedural | QueryIntent::Ecommerce => {
                structured_segments(snapshot, None, self.search_config.max_guide_segments)
            }
            QueryIntent::General => Vec::new(),
        };

        DetailContent {
            search_hits,
            structured_guides,
        }
    }
}
