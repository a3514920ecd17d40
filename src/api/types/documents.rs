//! Document endpoints request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::document::{CacheStatus, Category, CategoryStatus};

/// Query parameters for GET /v1/documents/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQueryParams {
    pub q: String,
    pub category: Option<String>,
}

/// GET /v1/documents/status response body
#[derive(Debug, Clone, Serialize)]
pub struct DocumentStatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_refreshed_at: Option<DateTime<Utc>>,
    pub categories: Vec<CategoryStatus>,
}

impl From<CacheStatus> for DocumentStatusResponse {
    fn from(status: CacheStatus) -> Self {
        Self {
            last_refreshed_at: status.last_refreshed_at,
            categories: status.categories,
        }
    }
}

/// POST /v1/documents/refresh response body
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    /// Categories that have content after the forced refresh
    pub loaded_categories: Vec<Category>,
}
