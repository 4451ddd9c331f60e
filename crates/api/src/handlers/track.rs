//! Track ingestion and lookup handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use flightlog_core::error::CoreError;
use flightlog_core::{geo, igc};
use flightlog_db::models::track::{CreateTrack, Track};
use flightlog_db::repositories::TrackRepo;

use crate::error::{AppError, AppResult};
use crate::fetch;
use crate::state::AppState;

/// Request body for `POST /track`.
#[derive(Debug, Deserialize)]
pub struct UrlInput {
    pub url: String,
}

/// Public view of one track, as returned by `GET /track/{id}`.
#[derive(Debug, Serialize)]
pub struct TrackInfo {
    pub h_date: String,
    pub pilot: String,
    pub glider: String,
    pub glider_id: String,
    pub track_length: f64,
    pub track_src_url: String,
}

impl From<Track> for TrackInfo {
    fn from(track: Track) -> Self {
        Self {
            h_date: track.h_date,
            pilot: track.pilot,
            glider: track.glider,
            glider_id: track.glider_id,
            track_length: track.track_length,
            track_src_url: track.url,
        }
    }
}

/// POST /track
///
/// Ingest a flight by URL: fetch and parse the IGC file, derive the track
/// length, persist, then hand off to the webhook notifier. Re-posting a
/// known URL returns 409 with the existing track's id.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UrlInput>,
) -> AppResult<Response> {
    let url = input.url.trim();
    if url.is_empty() {
        return Err(AppError::BadRequest("url must not be empty".into()));
    }

    if let Some(existing) = TrackRepo::find_by_url(&state.pool, url).await? {
        return Ok((
            StatusCode::CONFLICT,
            Json(json!({
                "error": "a track with this URL already exists",
                "id": existing.id,
            })),
        )
            .into_response());
    }

    let contents = fetch::fetch_igc(&state.http, url).await?;
    let flight = igc::parse(&contents).map_err(|err| AppError::UpstreamParse(err.to_string()))?;

    let track = TrackRepo::create(
        &state.pool,
        &CreateTrack {
            url: url.to_string(),
            h_date: flight.date,
            pilot: flight.pilot,
            glider: flight.glider,
            glider_id: flight.glider_id,
            track_length: geo::track_length(&flight.fixes),
        },
    )
    .await?;

    tracing::info!(track_id = %track.id, url, "Track ingested");

    // Trigger evaluation runs off the request path; a slow webhook endpoint
    // must not delay this response.
    let notifier = Arc::clone(&state.notifier);
    tokio::spawn(notifier.notify_track_added(state.pool.clone()));

    Ok(Json(track.id).into_response())
}

/// GET /track
///
/// All track ids, ordered by insertion time.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Uuid>>> {
    Ok(Json(TrackRepo::list_ids(&state.pool).await?))
}

/// GET /track/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TrackInfo>> {
    let track = find_track(&state, &id).await?;
    Ok(Json(track.into()))
}

/// GET /track/{id}/{field}
///
/// One named field of a track. Unknown field names are a 400; unknown ids
/// a 404.
pub async fn get_field(
    State(state): State<AppState>,
    Path((id, field)): Path<(String, String)>,
) -> AppResult<Json<serde_json::Value>> {
    let track = find_track(&state, &id).await?;

    let value = match field.to_lowercase().as_str() {
        "pilot" => json!(track.pilot),
        "glider" => json!(track.glider),
        "glider_id" => json!(track.glider_id),
        "track_length" => json!(track.track_length),
        "h_date" => json!(track.h_date),
        "track_src_url" => json!(track.url),
        _ => {
            return Err(AppError::BadRequest(format!(
                "unknown field '{field}', expected one of pilot, glider, glider_id, \
                 track_length, h_date, track_src_url"
            )));
        }
    };

    Ok(Json(value))
}

/// Look up a track by its raw path id. An id that cannot be a valid UUID
/// cannot exist in the store, so it gets the same 404 as a missing one.
async fn find_track(state: &AppState, raw_id: &str) -> AppResult<Track> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "track",
            id: raw_id.to_string(),
        })
    };

    let id = Uuid::parse_str(raw_id).map_err(|_| not_found())?;
    TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)
}
