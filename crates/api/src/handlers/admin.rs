//! Operational endpoints: track count and bulk purge.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use flightlog_db::repositories::TrackRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /admin/tracks_count
pub async fn tracks_count(State(state): State<AppState>) -> AppResult<Json<i64>> {
    Ok(Json(TrackRepo::count(&state.pool).await?))
}

/// DELETE /admin/tracks
///
/// Remove every track. Irreversible; there is no confirmation step.
/// Responds with the number of tracks removed.
pub async fn delete_tracks(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let removed = TrackRepo::delete_all(&state.pool).await?;
    tracing::info!(removed, "All tracks deleted");
    Ok(Json(json!({ "removed": removed })))
}
