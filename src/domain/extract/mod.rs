//! Content extraction - deriving condensed text from raw document text

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::document::Category;

/// Extraction strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Line-scan for heading-like section starts
    #[default]
    Heuristic,
    /// Model-assisted summarization with truncation fallback
    Model,
}

/// Strategy for condensing a category's raw text
///
/// Implementations are pure functions of (text, category, config) and
/// must degrade rather than fail: an unavailable summarization backend
/// falls back internally instead of aborting the caller's refresh.
#[async_trait]
pub trait ContentExtractor: Send + Sync + Debug {
    async fn condense(&self, raw_text: &str, category: Category) -> Result<String, DomainError>;

    fn name(&self) -> &'static str;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_kind_deserializes_lowercase() {
        let kind: ExtractorKind = serde_json::from_str("\"model\"").unwrap();
        assert_eq!(kind, ExtractorKind::Model);
    }

    #[test]
    fn test_extractor_kind_defaults_to_heuristic() {
        assert_eq!(ExtractorKind::default(), ExtractorKind::Heuristic);
    }
}
