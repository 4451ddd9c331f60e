//! Webhook delivery.
//!
//! [`WebhookDelivery`] sends a notification as a form-encoded HTTP POST
//! (`username`, `content` fields) to an external URL. Delivery is
//! best-effort and at-most-once: a single attempt with a bounded timeout,
//! no retry, no backoff. Failures are logged by the caller and swallowed.

use std::time::Duration;

use flightlog_core::trigger::SENDER_USERNAME;

/// HTTP request timeout for a delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("webhook returned HTTP {0}")]
    HttpStatus(u16),
}

/// Delivers notifications to external webhook endpoints.
pub struct WebhookDelivery {
    client: reqwest::Client,
}

impl WebhookDelivery {
    /// Create a delivery service with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }

    /// POST the rendered notification `content` to `url`. One attempt.
    pub async fn deliver(&self, url: &str, content: &str) -> Result<(), DeliveryError> {
        let params = [("username", SENDER_USERNAME), ("content", content)];
        let response = self.client.post(url).form(&params).send().await?;
        if !response.status().is_success() {
            return Err(DeliveryError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

impl Default for WebhookDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _delivery = WebhookDelivery::new();
    }

    #[test]
    fn delivery_error_display_http_status() {
        let err = DeliveryError::HttpStatus(502);
        assert_eq!(err.to_string(), "webhook returned HTTP 502");
    }

    #[test]
    fn delivery_error_display_request() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = DeliveryError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }
}
