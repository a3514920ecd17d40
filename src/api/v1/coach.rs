//! Coaching endpoint handler

use axum::extract::State;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CoachingRequest, CoachingResponse, Json};

/// POST /v1/coach
pub async fn create_coaching_response(
    State(state): State<AppState>,
    Json(request): Json<CoachingRequest>,
) -> Result<Json<CoachingResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        message_chars = request.message.chars().count(),
        "Processing coaching request"
    );

    let response = state
        .coach_service
        .respond(&request.message, &request.context)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Coaching request failed");
            ApiError::from(e)
        })?;

    Ok(Json(CoachingResponse::new(response)))
}
