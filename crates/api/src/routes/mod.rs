//! Route tree, one module per route group.
//!
//! ```text
//! GET    /                         redirect to /api
//! GET    /api                      meta info (uptime, version)
//! GET    /health                   service and database health
//!
//! POST   /track                    ingest a flight by URL
//! GET    /track                    all track ids
//! GET    /track/{id}               track metadata
//! GET    /track/{id}/{field}       one named field
//!
//! GET    /ticker/latest            latest wire timestamp
//! GET    /ticker/                  paged ticker from the beginning
//! GET    /ticker/{timestamp}       paged ticker after the cursor
//!
//! POST   /webhook/new_track/       register (upsert by URL)
//! GET    /webhook/new_track/{id}   fetch a registration
//! DELETE /webhook/new_track/{id}   remove a registration
//!
//! GET    /admin/tracks_count       track count
//! DELETE /admin/tracks             purge all tracks
//! ```
//!
//! Every method router carries a 501 fallback: methods a path does not
//! implement are "not implemented", not "not allowed".

pub mod admin;
pub mod health;
pub mod meta;
pub mod ticker;
pub mod track;
pub mod webhook;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(meta::router())
        .merge(track::router())
        .merge(ticker::router())
        .merge(webhook::router())
        .merge(admin::router())
}
