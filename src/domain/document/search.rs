//! Naive keyword search over cached document text
//!
//! Segments are paragraph-like blocks split on blank-line boundaries.
//! Matching is case-insensitive substring containment, first-K in
//! document order. No tokenization, stemming, or relevance ranking.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::{CacheSnapshot, Category};

/// A transient group of matching segments for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub category: Category,
    pub matches: Vec<String>,
}

/// Lines opening numbered procedural content ("1. ...", "2) ...", "Step 3 ...")
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^\s*(?:\d{1,3}[.)]\s|step\s+\d)").expect("numbered line pattern")
});

/// Split raw text into paragraph-like segments on blank-line boundaries
fn split_segments(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn categories_in_scope(category: Option<Category>) -> Vec<Category> {
    match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    }
}

/// Search the cached raw text for segments containing `query`
///
/// Scoped to one category when given, otherwise all categories in fixed
/// order. Categories with no matches are skipped entirely. Returns at
/// most `max_per_category` segments per category.
pub fn search(
    snapshot: &CacheSnapshot,
    query: &str,
    category: Option<Category>,
    max_per_category: usize,
) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    collect_hits(snapshot, category, max_per_category, |segment| {
        segment.to_lowercase().contains(&needle)
    })
}

/// Collect segments carrying numbered procedural content
///
/// Used by detail mode to surface step-based guides that a plain
/// substring search on the user's phrasing would miss.
pub fn structured_segments(
    snapshot: &CacheSnapshot,
    category: Option<Category>,
    max_per_category: usize,
) -> Vec<SearchHit> {
    collect_hits(snapshot, category, max_per_category, |segment| {
        NUMBERED_LINE.is_match(segment)
    })
}

fn collect_hits(
    snapshot: &CacheSnapshot,
    category: Option<Category>,
    max_per_category: usize,
    mut matches: impl FnMut(&str) -> bool,
) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    for category in categories_in_scope(category) {
        let Some(raw) = snapshot.raw(category) else {
            continue;
        };

        let segments: Vec<String> = split_segments(raw)
            .into_iter()
            .filter(|segment| matches(segment))
            .take(max_per_category)
            .map(str::to_string)
            .collect();

        if !segments.is_empty() {
            hits.push(SearchHit {
                category,
                matches: segments,
            });
        }
    }

    hits
}
