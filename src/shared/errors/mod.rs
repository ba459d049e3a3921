//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    /// Storage failure. Only `operation` is shown to clients; `source` is logged.
    #[error("Failed to {operation}")]
    Persistence {
        operation: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl UseCaseError {
    /// Wrap a repository failure with the operation that was attempted
    #[must_use]
    pub fn persistence(operation: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Persistence { operation, source }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Persistence { .. } => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    #[error("Method {method} is not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            ApiError::UseCase(uc_error) => {
                let status = uc_error.status_code();
                let code = uc_error.error_code().to_string();
                let message = uc_error.to_string();
                match uc_error {
                    UseCaseError::Validation(errors) => (status, code, message, Some(errors)),
                    UseCaseError::Persistence { operation, source } => {
                        tracing::error!(operation, error = %source, "Storage operation failed");
                        (status, code, message, None)
                    }
                    UseCaseError::NotFound { .. } => (status, code, message, None),
                }
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg, None),
            ApiError::InvalidId(msg) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ID".to_string(),
                format!("Invalid ID: {msg}"),
                None,
            ),
            err @ ApiError::RouteNotFound { .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND".to_string(), err.to_string(), None)
            }
            err @ ApiError::MethodNotAllowed { .. } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED".to_string(),
                err.to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<bson::oid::Error> for ApiError {
    fn from(err: bson::oid::Error) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut errors: Vec<FieldError> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldError {
                    field: (*field).to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map_or_else(|| format!("{field} is invalid"), ToString::to_string),
                })
            })
            .collect();
        // field_errors() is backed by a HashMap
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::UseCase(UseCaseError::Validation(errors))
    }
}
