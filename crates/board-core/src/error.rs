//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - what callers of the post board can observe.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The supplied identifier is not a well-formed post id.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
