//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ClienteleError`] via `#[from]`; adapter-local error types box
//! themselves into the [`Storage`](ClienteleError::Storage) variant.

use crate::validate::ValidationErrors;

/// Top-level error shared by services and adapters.
#[derive(Debug, thiserror::Error)]
pub enum ClienteleError {
    /// Submitted input violated one or more field rules. Never results in a
    /// partial write.
    #[error("invalid input")]
    Validation(#[from] ValidationErrors),

    /// A referenced record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The store failed; fatal to the request, never retried here.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Identifies the record a lookup failed to find.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity type name, for logs.
    pub entity: &'static str,
    /// The id that was looked up, as submitted.
    pub id: String,
}
