//! Domain logic for the flightlog service.
//!
//! Everything in this crate is pure computation over in-memory data:
//!
//! - [`ticker`] -- latest/oldest/oldest-newer timestamp scan and the bounded,
//!   ordered ticker page.
//! - [`trigger`] -- the webhook trigger decision and notification rendering.
//! - [`igc`] -- a minimal IGC flight-file reader (headers + position fixes).
//! - [`geo`] -- great-circle distances for the derived track length.
//! - [`timestamp`] -- the `DD.MM.YYYY HH:MM:SS.mmm` wire format.
//! - [`uptime`] -- ISO-8601-like duration formatting for the meta endpoint.
//!
//! I/O (HTTP, database, outbound delivery) lives in the sibling crates.

pub mod error;
pub mod geo;
pub mod igc;
pub mod ticker;
pub mod timestamp;
pub mod trigger;
pub mod types;
pub mod uptime;

pub use error::CoreError;
