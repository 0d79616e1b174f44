use crate::search::SearchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Search engine errors
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Malformed request input
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Failure whose details must not reach the client
    #[error("Internal server error")]
    Redacted,
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Redacted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::Search(err) => err.kind(),
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Redacted => "INTERNAL_ERROR",
        }
    }
}

/// Errors are returned as plain text carrying the error message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        tracing::error!(
            error_code = self.error_code(),
            status_code = status.as_u16(),
            message = %message,
            "Request error"
        );

        (status, message).into_response()
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
