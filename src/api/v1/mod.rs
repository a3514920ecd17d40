//! v1 API endpoints

pub mod coach;
pub mod documents;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/coach", post(coach::create_coaching_response))
        .route("/documents/search", get(documents::search_documents))
        .route("/documents/status", get(documents::document_status))
        .route("/documents/refresh", post(documents::refresh_documents))
}
