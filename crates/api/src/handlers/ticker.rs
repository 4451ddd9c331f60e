//! Ticker handlers: latest timestamp and the paged ticker payload.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use flightlog_core::ticker;
use flightlog_core::timestamp;
use flightlog_core::types::Timestamp;
use flightlog_db::repositories::TrackRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /ticker/latest
///
/// The wire timestamp of the most recently inserted track, as plain text,
/// or a human-readable message when the store is empty.
pub async fn latest(State(state): State<AppState>) -> AppResult<String> {
    let stamps = TrackRepo::list_stamps(&state.pool).await?;
    let timestamps = ticker::scan_timestamps(&stamps, None, Utc::now());

    Ok(match timestamps.latest {
        Some(ts) => timestamp::format_wire(&ts),
        None => "There are no track records".to_string(),
    })
}

/// GET /ticker/
///
/// Paged ticker payload from the beginning: `t_start` is the oldest
/// timestamp in the whole store.
pub async fn from_start(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    ticker_payload(&state, None).await
}

/// GET /ticker/{timestamp}
///
/// Paged ticker payload for entries strictly newer than the cursor:
/// `t_start` is the oldest timestamp after the cursor. An unparsable
/// cursor is a 400.
pub async fn from_cursor(
    State(state): State<AppState>,
    Path(raw_cursor): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let cursor = timestamp::parse_wire(&raw_cursor)?;
    ticker_payload(&state, Some(cursor)).await
}

/// Shared payload construction for both ticker queries.
///
/// Loads every `(id, time_recorded)` pair and runs the O(n) ticker scan;
/// `processing` reports the wall-clock cost of doing so.
async fn ticker_payload(
    state: &AppState,
    cursor: Option<Timestamp>,
) -> AppResult<Json<serde_json::Value>> {
    let started = Instant::now();

    let stamps = TrackRepo::list_stamps(&state.pool).await?;
    let window = ticker::compute(
        &stamps,
        cursor,
        state.config.ticker_page_size,
        Utc::now(),
    );

    // With a cursor, the page starts at the oldest entry after it;
    // without one, at the oldest entry overall.
    let t_start = if cursor.is_some() {
        window.timestamps.oldest_newer
    } else {
        window.timestamps.oldest
    };

    let processing = format!("{:.2}ms", started.elapsed().as_secs_f64() * 1000.0);

    Ok(Json(json!({
        "t_latest": window.timestamps.latest.map(|ts| timestamp::format_wire(&ts)),
        "t_start": t_start.map(|ts| timestamp::format_wire(&ts)),
        "t_stop": window.page.t_stop.map(|ts| timestamp::format_wire(&ts)),
        "tracks": window.page.track_ids,
        "processing": processing,
    })))
}
