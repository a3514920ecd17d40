//! Query intent classification
//!
//! A keyword-containment gate, not semantic classification. The phrase
//! lists are configuration so they can be reviewed and tuned without
//! touching the classifier.

use serde::{Deserialize, Serialize};

/// Intent tag assigned to an incoming coaching query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryIntent {
    /// Ordinary coaching question
    General,
    /// Asks for a guide, steps, or a named procedure
    Procedural,
    /// Asks about e-commerce topics with dedicated document coverage
    Ecommerce,
}

impl QueryIntent {
    /// Whether detail-mode search should run for this query
    pub fn wants_detail(self) -> bool {
        !matches!(self, QueryIntent::General)
    }
}

/// Trigger-phrase lists for intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    pub guide_phrases: Vec<String>,
    pub ecommerce_phrases: Vec<String>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            guide_phrases: [
                "step by step",
                "guide",
                "how to",
                "how do i",
                "steps",
                "process",
                "method",
                "blueprint",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            ecommerce_phrases: ["dropshipping", "e-commerce", "online store", "shopify"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Classify a query by keyword containment against the configured lists
pub fn classify_intent(message: &str, config: &IntentConfig) -> QueryIntent {
    let lower = message.to_lowercase();

    let contains_any = |phrases: &[String]| {
        phrases
            .iter()
            .any(|phrase| !phrase.is_empty() && lower.contains(&phrase.to_lowercase()))
    };

    if contains_any(&config.ecommerce_phrases) {
        QueryIntent::Ecommerce
    } else if contains_any(&config.guide_phrases) {
        QueryIntent::Procedural
    } else {
        QueryIntent::General
    }
}
