use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// A required input field is absent from the raw lead record.
    MissingField(String),
    /// The encoder's column layout diverges from the layout an artifact
    /// (scaler or model) was fitted against. Integrity fault: abort, never
    /// truncate or pad.
    SchemaMismatch(String),
    /// The corpus generator was invoked with invalid segment parameters.
    ConfigurationError(String),
    /// Bad request error (invalid input value types).
    BadRequest(String),
    /// Internal server error.
    InternalError(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingField(field) => write!(f, "Missing required field: {}", field),
            AppError::SchemaMismatch(msg) => write!(f, "Schema mismatch: {}", msg),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and JSON body.
    /// Input faults keep their detail verbatim so the caller can diagnose
    /// without re-running; integrity faults are logged and reported as 500s.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingField(field) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Missing required field: {}", field),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::SchemaMismatch(msg) => {
                tracing::error!("Schema mismatch: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Schema mismatch: {}", msg),
                )
            }
            AppError::ConfigurationError(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
