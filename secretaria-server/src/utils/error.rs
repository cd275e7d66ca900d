//! Unified error handling
//!
//! Application error enum plus the API response envelope:
//! - [`AppError`] - application error taxonomy
//! - [`AppResponse`] - API response structure
//!
//! # Error code table
//!
//! | Code  | Variant        | HTTP |
//! |-------|----------------|------|
//! | E0000 | success        | 200  |
//! | E0002 | Validation     | 400  |
//! | E0003 | NotFound       | 404  |
//! | E0006 | Configuration  | 400  |
//! | E9001 | Internal       | 500  |
//! | E9002 | Cache          | 500  |
//! | E9003 | RemoteCall     | 502  |
//! | E9004 | SyncFailed     | 502  |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Unified API response structure
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code (E0000 means success)
    pub code: String,
    /// Message
    pub message: String,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error taxonomy
///
/// Adapters raise these; stores catch, log and fall back; handlers convert
/// through `IntoResponse`. `is_transient` drives the retry policy: only
/// transient failures are worth re-attempting, a validation or not-found
/// error will fail the same way every time.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required connection fields missing, caught before any network call
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Non-success response or transport failure from the relational backend,
    /// carrying the backend's own message
    #[error("Remote store error: {0}")]
    RemoteCall(String),

    /// Spreadsheet proxy failure (non-success status or transport error)
    #[error("Sync failed: {0}")]
    SyncFailed(String),

    /// Update/delete against a non-existent id
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request payload rejected
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Local cache read/write failure
    #[error("Cache error: {0}")]
    Cache(String),

    /// Internal error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether a retry has any chance of succeeding.
    ///
    /// Network-level failures against either backend are transient; anything
    /// the caller did wrong (validation, configuration, missing id) is not.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::RemoteCall(_) | AppError::SyncFailed(_))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteCall(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Configuration(msg) => (StatusCode::BAD_REQUEST, "E0006", msg.as_str()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),

            AppError::RemoteCall(msg) => {
                error!(target: "remote", error = %msg, "Remote store call failed");
                (StatusCode::BAD_GATEWAY, "E9003", msg.as_str())
            }
            AppError::SyncFailed(msg) => {
                error!(target: "sheets", error = %msg, "Spreadsheet sync failed");
                (StatusCode::BAD_GATEWAY, "E9004", msg.as_str())
            }
            AppError::Cache(msg) => {
                error!(target: "cache", error = %msg, "Cache error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Cache error")
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::RemoteCall(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(format!("Serialization error: {e}"))
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: "Success".to_string(),
        data: Some(data),
    })
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: message.into(),
        data: Some(data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(AppError::remote("connection reset").is_transient());
        assert!(AppError::SyncFailed("502".into()).is_transient());
        assert!(!AppError::validation("bad cpf").is_transient());
        assert!(!AppError::not_found("membro 42").is_transient());
        assert!(!AppError::configuration("missing url").is_transient());
    }
}
