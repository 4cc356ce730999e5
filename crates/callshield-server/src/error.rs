//! Server error types
//!
//! Every non-2xx response carries `{"detail": "<message>"}`; the console shows
//! `detail` verbatim and falls back to a generic message when it is absent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use callshield_sdk::SdkError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Detail sent for failures whose cause must not leak to the client
pub const INTERNAL_DETAIL: &str = "internal server error";

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Entity already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) | ServerError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ServerError::InvalidRequest(msg)
            | ServerError::Conflict(msg)
            | ServerError::NotFound(msg) => msg,
            ServerError::InternalError(msg) => {
                error!("Request failed: {}", msg);
                INTERNAL_DETAIL.to_string()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<SdkError> for ServerError {
    fn from(err: SdkError) -> Self {
        let detail = err.detail();
        match err {
            SdkError::Validation(_) => ServerError::InvalidRequest(detail),
            SdkError::Conflict(_) => ServerError::Conflict(detail),
            SdkError::NotFound(_) => ServerError::NotFound(detail),
            _ => ServerError::InternalError(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
