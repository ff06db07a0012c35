use crate::types::DbId;

/// Domain-level failures shared by the db and api crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A plot, activity or user does not exist (or is not visible to the caller).
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request collides with existing state, e.g. an already registered email.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
