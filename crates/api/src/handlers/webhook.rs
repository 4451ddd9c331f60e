//! Webhook registration handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use flightlog_core::error::CoreError;
use flightlog_core::trigger;
use flightlog_db::models::webhook::{RegisterWebhook, Webhook};
use flightlog_db::repositories::WebhookRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /webhook/new_track/
///
/// Register a webhook, or update `minTriggerValue` in place when the URL
/// is already registered. Returns the registration id either way.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterWebhook>,
) -> AppResult<Json<Uuid>> {
    let url = input.webhook_url.trim();
    if url.is_empty() {
        return Err(AppError::BadRequest("webhookURL must not be empty".into()));
    }
    trigger::validate_min_trigger(input.min_trigger_value)?;

    let webhook = WebhookRepo::upsert(&state.pool, url, input.min_trigger_value).await?;

    tracing::info!(
        webhook_id = %webhook.id,
        url = %webhook.url,
        min_trigger_value = webhook.min_trigger_value,
        "Webhook registered",
    );

    Ok(Json(webhook.id))
}

/// GET /webhook/new_track/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Webhook>> {
    let id = parse_webhook_id(&id)?;
    let webhook = WebhookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(webhook))
}

/// DELETE /webhook/new_track/{id}
///
/// Remove a registration, echoing the removed webhook.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Webhook>> {
    let id = parse_webhook_id(&id)?;
    let webhook = WebhookRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(webhook_id = %webhook.id, url = %webhook.url, "Webhook deleted");

    Ok(Json(webhook))
}

/// An id that cannot be a valid UUID cannot exist in the store; treat it
/// as unknown.
fn parse_webhook_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: "webhook",
            id: raw.to_string(),
        })
    })
}

fn not_found(id: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "webhook",
        id: id.to_string(),
    })
}
