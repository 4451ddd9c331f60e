//! Repository for the `webhooks` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::webhook::Webhook;

const COLUMNS: &str = "id, url, min_trigger_value, created_at";

/// Provides CRUD operations for webhook registrations.
pub struct WebhookRepo;

impl WebhookRepo {
    /// Register a webhook, or update `min_trigger_value` in place when the
    /// URL is already registered. At most one registration per URL.
    pub async fn upsert(
        pool: &PgPool,
        url: &str,
        min_trigger_value: i32,
    ) -> Result<Webhook, sqlx::Error> {
        let query = format!(
            "INSERT INTO webhooks (url, min_trigger_value) VALUES ($1, $2) \
             ON CONFLICT (url) DO UPDATE SET min_trigger_value = EXCLUDED.min_trigger_value \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Webhook>(&query)
            .bind(url)
            .bind(min_trigger_value)
            .fetch_one(pool)
            .await
    }

    /// Find a registration by its id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Webhook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webhooks WHERE id = $1");
        sqlx::query_as::<_, Webhook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all registrations.
    pub async fn list(pool: &PgPool) -> Result<Vec<Webhook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webhooks ORDER BY created_at");
        sqlx::query_as::<_, Webhook>(&query).fetch_all(pool).await
    }

    /// Delete a registration by id, returning the removed row, or `None`
    /// if it did not exist.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<Webhook>, sqlx::Error> {
        let query = format!("DELETE FROM webhooks WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Webhook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
