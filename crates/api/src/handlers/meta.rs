//! Service meta information.

use axum::extract::State;
use axum::response::Redirect;
use axum::Json;
use serde::Serialize;

use flightlog_core::uptime;

use crate::state::AppState;

/// Meta information about the API.
#[derive(Debug, Serialize)]
pub struct MetaInfo {
    pub uptime: String,
    pub info: String,
    pub version: String,
}

/// GET /
///
/// The service root just points at the meta endpoint.
pub async fn root() -> Redirect {
    Redirect::temporary("/api")
}

/// GET /api
pub async fn info(State(state): State<AppState>) -> Json<MetaInfo> {
    Json(MetaInfo {
        uptime: uptime::format_uptime(state.started_at.elapsed()),
        info: "Service for IGC tracks".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
