use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::item_actor::ItemError;
use crate::order_actor::OrderError;
use crate::user_actor::UserError;

/// Errors a handler can return. Rendered as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Item not found")]
    NotFound,
    #[error("Invalid user or item")]
    InvalidReference,
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidReference => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(cause) = &self {
            error!(error = %cause, "Request failed");
        }
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => Self::NotFound,
            ItemError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidUser(_) | OrderError::InvalidItem(_) => Self::InvalidReference,
            OrderError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}
