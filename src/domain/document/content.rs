use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Delimiter line identifying which source a block of raw text came from
pub fn source_delimiter(document_id: &str) -> String {
    format!("[source: {}]", document_id)
}

/// Cached content for one category
///
/// `condensed_text` is always derived from the current `raw_text`; the
/// pair is only ever replaced together during a refresh cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryContent {
    /// Ordered concatenation of all fetched source texts, each preceded
    /// by a source delimiter line
    pub raw_text: String,
    /// Condensed representation derived from `raw_text`
    pub condensed_text: String,
    /// Number of sources that contributed text this cycle
    pub document_count: usize,
}

impl CategoryContent {
    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }

    pub fn character_count(&self) -> usize {
        self.raw_text.chars().count()
    }
}

/// The complete cached mapping plus the single timestamp covering it
///
/// Either all categories reflect the same refresh cycle, or the map is
/// empty (pre-first-refresh). Cloned on read; mutated only by swapping
/// in a fully built replacement.
#[derive(Debug, Clone, Default)]
pub struct CacheSnapshot {
    pub entries: HashMap<Category, CategoryContent>,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl CacheSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the snapshot needs a refresh given the configured TTL
    pub fn is_stale(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match self.last_refreshed_at {
            None => true,
            Some(refreshed_at) => {
                let ttl = chrono::Duration::from_std(ttl)
                    .unwrap_or_else(|_| chrono::Duration::MAX);
                now - refreshed_at > ttl
            }
        }
    }

    pub fn raw(&self, category: Category) -> Option<&str> {
        self.entries
            .get(&category)
            .map(|content| content.raw_text.as_str())
    }

    pub fn condensed(&self, category: Category) -> Option<&str> {
        self.entries
            .get(&category)
            .map(|content| content.condensed_text.as_str())
    }

    /// Per-category load status, in fixed category order
    pub fn status(&self) -> CacheStatus {
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let content = self.entries.get(&category);

                CategoryStatus {
                    category,
                    loaded: content.is_some_and(|c| !c.is_empty()),
                    document_count: content.map_or(0, |c| c.document_count),
                    character_count: content.map_or(0, |c| c.character_count()),
                }
            })
            .collect();

        CacheStatus {
            last_refreshed_at: self.last_refreshed_at,
            categories,
        }
    }
}

/// Load state reported for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStatus {
    pub category: Category,
    pub loaded: bool,
    pub document_count: usize,
    pub character_count: usize,
}

/// Load state for the whole cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_refreshed_at: Option<DateTime<Utc>>,
    pub categories: Vec<CategoryStatus>,
}

/// What a stale caller does while another task is already refreshing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Wait for the in-flight refresh and read its result
    #[default]
    Wait,
    /// Proceed immediately with the current (possibly stale) snapshot
    ServeStale,
}
