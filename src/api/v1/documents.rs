//! Document administration endpoints

use std::str::FromStr;

use axum::extract::{Query, State};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, DocumentStatusResponse, Json, RefreshResponse, SearchQueryParams,
};
use crate::domain::document::search::search;
use crate::domain::document::{Category, SearchHit};

/// GET /v1/documents/search
pub async fn search_documents(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let category = params
        .category
        .as_deref()
        .map(Category::from_str)
        .transpose()
        .map_err(|e| ApiError::from(e).with_param("category"))?;

    // Searches the current snapshot as-is; only coaching requests pay
    // for a refresh.
    let snapshot = state.document_cache.snapshot().await;
    let results = search(
        &snapshot,
        &params.q,
        category,
        state.search_config.max_hits_per_category,
    );

    Ok(Json(results))
}

/// GET /v1/documents/status
pub async fn document_status(State(state): State<AppState>) -> Json<DocumentStatusResponse> {
    Json(state.document_cache.status().await.into())
}

/// POST /v1/documents/refresh
pub async fn refresh_documents(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, ApiError> {
    state.document_cache.force_invalidate().await;
    let snapshot = state.document_cache.ensure_fresh().await.map_err(ApiError::from)?;

    let loaded_categories: Vec<Category> = Category::ALL
        .iter()
        .copied()
        .filter(|&category| {
            snapshot
                .entries
                .get(&category)
                .is_some_and(|content| !content.is_empty())
        })
        .collect();

    info!(loaded = loaded_categories.len(), "forced document refresh complete");

    Ok(Json(RefreshResponse { loaded_categories }))
}
