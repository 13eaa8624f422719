use thiserror::Error;

/// Errors that can occur during order operations.
///
/// `InvalidUser` and `InvalidItem` are both invalid-reference failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Invalid user: {0}")]
    InvalidUser(i64),
    #[error("Invalid item: {0}")]
    InvalidItem(i64),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

