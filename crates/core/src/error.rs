//! Domain error taxonomy.

/// Domain-level error. The API layer maps each variant to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Input failed validation (malformed timestamp, empty URL, bad
    /// trigger value, unknown field name).
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state (duplicate URL).
    #[error("{0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
