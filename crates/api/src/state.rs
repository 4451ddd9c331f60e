use std::sync::Arc;
use std::time::Instant;

use flightlog_events::NewTrackNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: flightlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process start time, for the uptime field of the meta endpoint.
    pub started_at: Instant,
    /// HTTP client for fetching remote IGC files.
    pub http: reqwest::Client,
    /// Webhook trigger evaluation and dispatch.
    pub notifier: Arc<NewTrackNotifier>,
}
