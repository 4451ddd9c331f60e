//! Uptime rendering for the meta endpoint.

use std::time::Duration;

/// Format an elapsed duration as the ISO-8601-like string
/// `PnYnDnHnMn.nS`, with the fractional part in deciseconds (rounded).
pub fn format_uptime(elapsed: Duration) -> String {
    // Round to the nearest decisecond before splitting into fields.
    let deciseconds = (elapsed.as_millis() as u64 + 50) / 100;
    let fraction = deciseconds % 10;
    let total_secs = deciseconds / 10;

    let total_days = total_secs / 86_400;
    let years = total_days / 365;
    let days = total_days % 365;

    let rem = total_secs % 86_400;
    let hours = rem / 3_600;
    let minutes = (rem % 3_600) / 60;
    let seconds = rem % 60;

    format!("P{years}Y{days}D{hours}H{minutes}M{seconds}.{fraction}S")
}
