//! Outbound notification infrastructure.
//!
//! - [`WebhookDelivery`] -- fire-and-forget HTTP POST of a notification to a
//!   registered webhook URL.
//! - [`NewTrackNotifier`] -- evaluates all registrations after a track
//!   insert and dispatches the deliveries that fire.

pub mod delivery;
pub mod notifier;

pub use delivery::{DeliveryError, WebhookDelivery};
pub use notifier::NewTrackNotifier;
