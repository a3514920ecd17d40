//! System prompt assembly
//!
//! Produces the single text block handed to the completion capability:
//! role framing, condensed document content per category, detail-mode
//! search results, the caller's status values, and the behavioral
//! directives.

use std::fmt::Write;

use crate::domain::coach::UserContext;
use crate::domain::document::{CacheSnapshot, Category, SearchHit};

const ROLE_FRAMING: &str = "You are a direct AI coach. When users ask for guides or \
step-by-step instructions, you MUST use the exact structure from the documents.\n\n\
IMPORTANT: If the documents contain a numbered guide or blueprint, reproduce it \
EXACTLY with all the specific details, tools, percentages, and methods mentioned.";

const DIRECTIVES: &[&str] = &[
    "If the documents contain a step-by-step guide, use it exactly - do not invent your own",
    "Include all specific details: percentages, tools, and methods named in the documents",
    "Quote exact strategies, not generic advice",
    "If the user asks for a guide and one exists in the documents, provide it in full",
    "Never give generic advice when specific strategies exist in the documents",
];

/// Search results injected into the prompt when detail mode runs
#[derive(Debug, Clone, Default)]
pub struct DetailContent {
    pub search_hits: Vec<SearchHit>,
    pub structured_guides: Vec<SearchHit>,
}

impl DetailContent {
    pub fn is_empty(&self) -> bool {
        self.search_hits.is_empty() && self.structured_guides.is_empty()
    }
}

/// Assembles the system prompt from cached content and caller status
#[derive(Debug, Clone, Default)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(
        &self,
        snapshot: &CacheSnapshot,
        detail: &DetailContent,
        context: &UserContext,
    ) -> String {
        let mut prompt = String::from(ROLE_FRAMING);

        self.write_document_content(&mut prompt, snapshot);
        self.write_detail_content(&mut prompt, detail);
        self.write_user_status(&mut prompt, context);
        self.write_directives(&mut prompt);

        prompt
    }

    fn write_document_content(&self, prompt: &mut String, snapshot: &CacheSnapshot) {
        let mut sections = Category::ALL
            .iter()
            .filter_map(|&category| {
                snapshot
                    .condensed(category)
                    .filter(|condensed| !condensed.is_empty())
                    .map(|condensed| (category, condensed))
            })
            .peekable();

        if sections.peek().is_none() {
            return;
        }

        prompt.push_str("\n\nDOCUMENT CONTENT:");
        for (category, condensed) in sections {
            let _ = write!(
                prompt,
                "\n\n{}:\n{}",
                category.as_str().to_uppercase(),
                condensed
            );
        }
    }

    fn write_detail_content(&self, prompt: &mut String, detail: &DetailContent) {
        for hit in &detail.search_hits {
            let _ = write!(
                prompt,
                "\n\nRELEVANT EXCERPTS FROM {}:\n{}",
                hit.category.as_str().to_uppercase(),
                hit.matches.join("\n")
            );
        }

        for hit in &detail.structured_guides {
            let _ = write!(
                prompt,
                "\n\nSTRUCTURED GUIDE FROM {}:\n{}",
                hit.category.as_str().to_uppercase(),
                hit.matches.join("\n")
            );
        }
    }

    fn write_user_status(&self, prompt: &mut String, context: &UserContext) {
        prompt.push_str("\n\nUSER STATUS:");
        for pillar in &context.pillars {
            let _ = write!(prompt, "\n- {}: {:.0}%", pillar.name, pillar.value);
        }

        if let Some(overall) = context.overall_score {
            let _ = write!(prompt, "\n- Overall: {:.0}%", overall);
        }

        if let Some(ref lowest) = context.lowest_pillar {
            let _ = write!(prompt, "\n- Lowest pillar: {}", lowest);
        }
    }

    fn write_directives(&self, prompt: &mut String) {
        prompt.push_str("\n\nSTRICT RULES:");
        for (i, directive) in DIRECTIVES.iter().enumerate() {
            let _ = write!(prompt, "\n{}. {}", i + 1, directive);
        }
    }
}
