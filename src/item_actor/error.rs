use thiserror::Error;

/// Errors that can occur during item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i64),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
