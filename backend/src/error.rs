//! Error handling for the Plant Care Platform
//!
//! Every error is rendered as a JSON envelope. The top-level `message`
//! mirrors `error.message` for clients that only read `data.message`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("External service error: {0}")]
    ExternalService(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a field-level validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status and body detail for this error
    pub fn detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("INVALID_CREDENTIALS", "Invalid email or password"),
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("INVALID_TOKEN", "Not authorized, token failed"),
            ),
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("UNAUTHORIZED", message.clone()),
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    field: Some(field.clone()),
                    ..ErrorDetail::new("VALIDATION_ERROR", message.clone())
                },
            ),
            AppError::DuplicateEntry(message) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("DUPLICATE_ENTRY", message.clone()),
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new("NOT_FOUND", format!("{} not found", resource)),
            ),
            AppError::ExternalService(message) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail::new("EXTERNAL_SERVICE_ERROR", message.clone()),
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("DATABASE_ERROR", "A database error occurred"),
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("INTERNAL_ERROR", message.clone()),
            ),
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorDetail {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: None,
        }
    }
}

impl From<ErrorDetail> for ErrorResponse {
    fn from(error: ErrorDetail) -> Self {
        Self {
            message: error.message.clone(),
            error,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.keys().copied().collect();
        fields.sort_unstable();

        let Some(field) = fields.first().copied() else {
            return AppError::validation("request", "Invalid request");
        };

        let message = field_errors
            .get(field)
            .and_then(|errors| errors.first())
            .and_then(|error| error.message.as_ref())
            .map(|message| message.to_string())
            .unwrap_or_else(|| format!("Invalid {}", field));

        AppError::validation(field, message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation("body", rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse::from(error_detail))).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Signup {
        #[validate(email(message = "Please enter a valid email"))]
        email: String,
        #[validate(length(min = 6))]
        password: String,
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let (status, detail) = AppError::validation("location", "Location is required").detail();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.message, "Location is required");
        assert_eq!(detail.field.as_deref(), Some("location"));
    }

    #[test]
    fn test_envelope_mirrors_message() {
        let (_, detail) = AppError::NotFound("Favorite".to_string()).detail();
        let body = serde_json::to_value(ErrorResponse::from(detail)).unwrap();

        assert_eq!(body["message"], "Favorite not found");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"].get("field").is_none());
    }

    #[test]
    fn test_validator_errors_pick_first_field() {
        let signup = Signup {
            email: "nope".to_string(),
            password: "123".to_string(),
        };
        let err = AppError::from(signup.validate().unwrap_err());

        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Please enter a valid email");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validator_default_message() {
        let signup = Signup {
            email: "grower@example.com".to_string(),
            password: "123".to_string(),
        };
        let err = AppError::from(signup.validate().unwrap_err());

        assert_eq!(err.detail().1.message, "Invalid password");
    }
}
