use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
