//! New-track notification dispatch.
//!
//! Runs after every successful track insert, off the request path: the
//! ingestion handler spawns [`NewTrackNotifier::notify_track_added`] and
//! returns immediately, so webhook endpoint latency never shows up in
//! ingestion latency. Store reads complete before any network I/O starts,
//! so no pool connection is held across an outbound POST.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use flightlog_core::ticker;
use flightlog_core::timestamp;
use flightlog_core::trigger;
use flightlog_db::repositories::{TrackRepo, WebhookRepo};

use crate::delivery::WebhookDelivery;

/// Evaluates webhook registrations after a track insert and dispatches the
/// notifications that fire.
pub struct NewTrackNotifier {
    delivery: Arc<WebhookDelivery>,
}

impl NewTrackNotifier {
    pub fn new() -> Self {
        Self {
            delivery: Arc::new(WebhookDelivery::new()),
        }
    }

    /// Evaluate every registered webhook against the current track count
    /// and deliver to those whose trigger condition holds.
    ///
    /// The count is read from the store, not an in-process counter, so
    /// concurrent inserts each see their own post-insert count. Delivery
    /// failures are logged and swallowed; a webhook is never unregistered
    /// because its endpoint misbehaved.
    pub async fn notify_track_added(self: Arc<Self>, pool: PgPool) {
        let started = Instant::now();

        let webhooks = match WebhookRepo::list(&pool).await {
            Ok(webhooks) => webhooks,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load webhooks for trigger evaluation");
                return;
            }
        };
        if webhooks.is_empty() {
            return;
        }

        let stamps = match TrackRepo::list_stamps(&pool).await {
            Ok(stamps) => stamps,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load tracks for trigger evaluation");
                return;
            }
        };
        let track_count = stamps.len() as u64;

        let timestamps = ticker::scan_timestamps(&stamps, None, Utc::now());
        let t_latest = timestamps
            .latest
            .map(|ts| timestamp::format_wire(&ts))
            .unwrap_or_default();
        let track_ids: Vec<Uuid> = stamps.iter().map(|s| s.id).collect();

        let processing = format!("{:.2} ms", started.elapsed().as_secs_f64() * 1000.0);
        let content = trigger::render_content(&t_latest, &track_ids, &processing);

        for webhook in webhooks {
            if !trigger::should_fire(track_count, webhook.min_trigger_value) {
                continue;
            }

            tracing::info!(
                webhook_id = %webhook.id,
                url = %webhook.url,
                track_count,
                "Webhook trigger fired",
            );

            let delivery = Arc::clone(&self.delivery);
            let content = content.clone();
            tokio::spawn(async move {
                if let Err(err) = delivery.deliver(&webhook.url, &content).await {
                    tracing::warn!(
                        webhook_id = %webhook.id,
                        url = %webhook.url,
                        error = %err,
                        "Webhook delivery failed",
                    );
                }
            });
        }
    }
}

impl Default for NewTrackNotifier {
    fn default() -> Self {
        Self::new()
    }
}
