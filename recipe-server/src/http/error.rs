//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": message}` JSON bodies with the
//! matching status code. Store failures are logged here and answered
//! with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input (400)
    Validation(ValidationError),

    /// Addressed row absent (404)
    NotFound { resource: &'static str, id: String },

    /// Refused by a uniqueness or reference constraint (409)
    Conflict { message: &'static str },

    /// Store error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::Conflict { message } => (*message).to_string(),
            Self::Database(_) => "an internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// Conversion happens at the handler's `?`, inside its span, so the log
// line carries the operation and key.
impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "not found");
                Self::NotFound { resource, id }
            }
            DbError::Conflict { message } => {
                tracing::debug!(reason = message, "constraint refused write");
                Self::Conflict { message }
            }
            DbError::Sqlx(_) => {
                tracing::error!(error = %e, "database error");
                Self::Database(e)
            }
        }
    }
}
