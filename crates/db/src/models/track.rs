//! Track entity model and DTOs.

use flightlog_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `tracks` table. Tracks are immutable once ingested.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: Uuid,
    /// Source location of the IGC file; unique, the natural key for
    /// deduplication.
    pub url: String,
    pub time_recorded: Timestamp,
    pub h_date: String,
    pub pilot: String,
    pub glider: String,
    pub glider_id: String,
    pub track_length: f64,
}

/// Insert input for a new track. `id` and `time_recorded` are
/// store-generated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub url: String,
    pub h_date: String,
    pub pilot: String,
    pub glider: String,
    pub glider_id: String,
    pub track_length: f64,
}
