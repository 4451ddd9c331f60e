//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod track_repo;
pub mod webhook_repo;

pub use track_repo::TrackRepo;
pub use webhook_repo::WebhookRepo;
