//! Heuristic key-section extraction
//!
//! Scans raw text line by line. Heading-like lines open a new section;
//! following non-empty lines are appended to it until the next heading
//! or end of input. Accumulation stops once the output exceeds the
//! configured maximum length, flushing the section open at that point.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DomainError;
use crate::domain::document::Category;
use crate::domain::extract::ContentExtractor;

/// Numbered list markers: "1. ", "12) "
static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}[.)]\s+").expect("numbered pattern"));

/// Bullet markers: "- ", "* ", "• "
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s+").expect("bullet pattern"));

/// Maximum length of a line still considered a title
const MAX_TITLE_LEN: usize = 60;

/// Configuration for heuristic extraction
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    /// Extraction stops once output exceeds this many characters
    pub max_condensed_len: usize,
    /// Case-sensitive keywords marking heading-like lines
    pub marker_keywords: Vec<String>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            max_condensed_len: 4000,
            marker_keywords: ["Key", "Step", "Method", "Guide", "Blueprint", "Rule", "Principle"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Line-scan extractor for key sections
#[derive(Debug, Clone, Default)]
pub struct HeuristicExtractor {
    config: HeuristicConfig,
}

impl HeuristicExtractor {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    fn is_heading(&self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }

        NUMBERED.is_match(line)
            || BULLET.is_match(line)
            || is_title_with_colon(line)
            || self
                .config
                .marker_keywords
                .iter()
                .any(|keyword| line.contains(keyword.as_str()))
    }
}

/// Short title-cased line ending in a colon
fn is_title_with_colon(line: &str) -> bool {
    if !line.ends_with(':') || line.len() > MAX_TITLE_LEN {
        return false;
    }

    let title = line.trim_end_matches(':').trim();
    !title.is_empty()
        && title.split_whitespace().all(|word| {
            word.chars()
                .next()
                .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
        })
}

#[async_trait]
impl ContentExtractor for HeuristicExtractor {
    async fn condense(&self, raw_text: &str, _category: Category) -> Result<String, DomainError> {
        let mut sections: Vec<String> = Vec::new();
        let mut current: Option<String> = None;
        let mut flushed_len = 0;

        for line in raw_text.lines() {
            let line = line.trim();

            if self.is_heading(line) {
                if let Some(section) = current.take() {
                    flushed_len += section.len();
                    sections.push(section);
                }
                current = Some(line.to_string());
            } else if !line.is_empty() {
                if let Some(section) = current.as_mut() {
                    section.push('\n');
                    section.push_str(line);
                }
            }
            // Lines before the first heading are ignored.

            let open_len = current.as_ref().map_or(0, |s| s.len());
            if flushed_len + open_len > self.config.max_condensed_len {
                if let Some(section) = current.take() {
                    sections.push(section);
                }
                break;
            }
        }

        if let Some(section) = current.take() {
            sections.push(section);
        }

        Ok(sections.join("\n\n"))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
