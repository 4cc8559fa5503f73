use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    /// The submitted body could not be decoded into a receipt
    InvalidReceipt(String),
    /// The receipt id could not be taken from the request path
    InvalidPath(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::InvalidReceipt(msg) => write!(f, "Invalid receipt: {}", msg),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::InvalidReceipt(_) | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "No receipt found for that ID."
                })
            }
            Self::InvalidReceipt(details) => {
                tracing::warn!("Rejected receipt: {}", details);
                json!({
                    "error": "The receipt is invalid.",
                    "details": details
                })
            }
            Self::InvalidPath(msg) => {
                tracing::warn!("Rejected path: {}", msg);
                json!({
                    "error": "Invalid path"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidReceipt(rejection.body_text())
    }
}

impl From<PathRejection> for WebError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;
