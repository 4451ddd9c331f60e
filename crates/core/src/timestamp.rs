//! The wire timestamp format used by the ticker API.
//!
//! Timestamps cross the wire as `DD.MM.YYYY HH:MM:SS.mmm` (day-first,
//! millisecond precision) and are always interpreted as UTC.

use chrono::NaiveDateTime;

use crate::error::CoreError;
use crate::types::Timestamp;

/// chrono format string for `DD.MM.YYYY HH:MM:SS.mmm`.
pub const WIRE_FORMAT: &str = "%d.%m.%Y %H:%M:%S%.3f";

/// Parse a wire timestamp. Anything that does not match the fixed format is
/// a validation error (the caller turns this into a 400).
pub fn parse_wire(input: &str) -> Result<Timestamp, CoreError> {
    NaiveDateTime::parse_from_str(input, WIRE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            CoreError::Validation(format!(
                "invalid timestamp '{input}', expected DD.MM.YYYY HH:MM:SS.mmm"
            ))
        })
}

/// Render a timestamp in the wire format.
pub fn format_wire(ts: &Timestamp) -> String {
    ts.format(WIRE_FORMAT).to_string()
}
