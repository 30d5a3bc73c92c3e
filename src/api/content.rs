//! Content scheduling endpoints.

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

use crate::db::{
    ContentSchedule, ScheduledContentResponse, UpsertScheduleRequest, UpsertScheduleResponse,
};
use crate::AppState;

use super::error::ApiError;

/// Schedule a content item's display window, creating the schedule on
/// first request and moving the window in place afterwards.
///
/// POST /content/schedule
pub async fn upsert_schedule(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpsertScheduleRequest>,
) -> Result<Json<UpsertScheduleResponse>, ApiError> {
    // No validation of the content id or window; any store error
    // propagates as a generic failure
    let stored = ContentSchedule::upsert(
        &state.db,
        &request.content_id,
        &request.start,
        request.end.as_ref(),
    )
    .await;

    // The response echoes the requested window rather than re-reading the
    // stored row; success tracks whether the store produced one.
    match stored {
        Ok(_) => {
            info!(content_id = %request.content_id, "Content schedule upserted");
            Ok(Json(UpsertScheduleResponse {
                success: true,
                content_id: request.content_id,
                start: request.start,
                end: request.end,
            }))
        }
        Err(e) => Err(e.into()),
    }
}

/// List all content currently scheduled for display.
///
/// GET /content/scheduled
pub async fn list_scheduled(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ScheduledContentResponse>, ApiError> {
    let scheduled_contents = ContentSchedule::list_active(&state.db).await?;
    Ok(Json(ScheduledContentResponse { scheduled_contents }))
}
