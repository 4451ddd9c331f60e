//! Repository for the `tracks` table.

use flightlog_core::ticker::TrackStamp;
use flightlog_core::types::Timestamp;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::track::{CreateTrack, Track};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, url, time_recorded, h_date, pilot, glider, glider_id, track_length";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row. The store generates
    /// the id and insertion timestamp.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (url, h_date, pilot, glider, glider_id, track_length) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.url)
            .bind(&input.h_date)
            .bind(&input.pilot)
            .bind(&input.glider)
            .bind(&input.glider_id)
            .bind(input.track_length)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a track by its source URL (the deduplication key).
    pub async fn find_by_url(pool: &PgPool, url: &str) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE url = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(url)
            .fetch_optional(pool)
            .await
    }

    /// List all track ids, ordered by insertion time.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<Uuid>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM tracks ORDER BY time_recorded")
            .fetch_all(pool)
            .await
    }

    /// List `(id, time_recorded)` for all tracks, ordered by insertion
    /// time. This is the ticker engine's input.
    pub async fn list_stamps(pool: &PgPool) -> Result<Vec<TrackStamp>, sqlx::Error> {
        let rows: Vec<(Uuid, Timestamp)> =
            sqlx::query_as("SELECT id, time_recorded FROM tracks ORDER BY time_recorded")
                .fetch_all(pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|(id, time_recorded)| TrackStamp { id, time_recorded })
            .collect())
    }

    /// Count all tracks.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
            .fetch_one(pool)
            .await
    }

    /// Delete all tracks, returning the number removed. Irreversible.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
