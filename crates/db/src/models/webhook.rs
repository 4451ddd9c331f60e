//! Webhook registration model and DTOs.

use flightlog_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `webhooks` table.
///
/// Serialized field names follow the public wire format (`webhook_id`,
/// `webhook_url`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Webhook {
    #[serde(rename = "webhook_id")]
    pub id: Uuid,
    #[serde(rename = "webhook_url")]
    pub url: String,
    /// Notify on every Nth inserted track. Always positive; enforced at
    /// registration and by a CHECK constraint.
    pub min_trigger_value: i32,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// Registration request body: `{"webhookURL": ..., "minTriggerValue": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterWebhook {
    #[serde(rename = "webhookURL")]
    pub webhook_url: String,
    #[serde(rename = "minTriggerValue")]
    pub min_trigger_value: i32,
}
