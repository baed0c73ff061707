//! Domain error types for TestHub.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError};
use serde_json::Value as JsonValue;
use std::fmt;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Invalid input data
    #[error("{message}")]
    InvalidInput {
        message: String,
        details: Option<JsonValue>,
    },

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Invalid input without field-level details.
    pub fn invalid(message: impl Into<String>) -> Self {
        AppError::InvalidInput {
            message: message.into(),
            details: None,
        }
    }

    /// Invalid input with structured details (e.g. a deserializer message).
    pub fn invalid_with_details(message: impl Into<String>, details: JsonValue) -> Self {
        AppError::InvalidInput {
            message: message.into(),
            details: Some(details),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
                error: self.to_string(),
                details: None,
            }),
            AppError::InvalidInput { message, details } => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: message.clone(),
                    details: details.clone(),
                })
            }
            AppError::Internal(err_str) => {
                tracing::error!("Internal error: {}", err_str);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Internal server error".to_string(),
                    details: None,
                })
            }
        }
    }
}

/// Error response body matching the OpenAPI schema.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::invalid_with_details(
            "Invalid request body",
            JsonValue::String(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound("Configuration".to_string());
        assert_eq!(err.to_string(), "Configuration not found");
        assert_eq!(err.error_response().status().as_u16(), 404);
    }

    #[test]
    fn test_invalid_input_status() {
        let err = AppError::invalid("Invalid configuration data");
        assert_eq!(err.error_response().status().as_u16(), 400);
    }

    #[test]
    fn test_internal_status() {
        let err = AppError::Internal("boom".to_string());
        assert_eq!(err.error_response().status().as_u16(), 500);
    }
}
