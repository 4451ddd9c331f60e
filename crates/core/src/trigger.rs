//! Webhook trigger decision and notification rendering.
//!
//! A webhook with `min_trigger_value` N is notified on every Nth inserted
//! track: the trigger fires when the post-insert track count is an exact
//! multiple of N. The notification body is a fenced text block carrying the
//! latest timestamp, the full id list, and the processing time, delivered
//! form-encoded (`username`, `content`) by the events crate.

use uuid::Uuid;

use crate::error::CoreError;

/// `username` form field sent with every notification.
pub const SENDER_USERNAME: &str = "tracks";

/// Reject non-positive trigger values at registration time.
///
/// A zero value would make the firing condition a division by zero, so it is
/// refused up front instead of being interpreted at trigger time.
pub fn validate_min_trigger(value: i32) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(
            "minTriggerValue must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Whether a webhook fires for the given post-insert track count.
pub fn should_fire(track_count: u64, min_trigger_value: i32) -> bool {
    if min_trigger_value <= 0 {
        // Registration rejects these; a stored bad value must never fire.
        return false;
    }
    track_count > 0 && track_count % (min_trigger_value as u64) == 0
}

/// Render the notification `content` block.
pub fn render_content(t_latest: &str, track_ids: &[Uuid], processing: &str) -> String {
    let ids = track_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut content = String::from("```css");
    content.push_str(&format!("\n{{ \n\t\"t_latest\" : \"{t_latest}\" ,"));
    content.push_str(&format!(" \n\t\"tracks\" : [ {ids} ] ,"));
    content.push_str(&format!(" \n\t\"processing\" : \"{processing}\" \n}}\n"));
    content.push_str("```");
    content
}
