//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod repository;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, repository::RepositoryError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM outside of a repository call.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Repository failure during a read.
    ///
    /// Validation maps to 400, missing rows to 404, everything else to a generic 500.
    #[error(transparent)]
    RepositoryErr(#[from] RepositoryError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// The store refused to remove a record because other rows still depend on it.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// A create, update or delete could not be persisted.
    ///
    /// Results in 500 Internal Server Error. `message` names the record and is returned to
    /// the client; `source` is only logged.
    #[error("{message}: {source}")]
    WriteFailed {
        message: String,
        #[source]
        source: RepositoryError,
    },

}

impl AppError {
    /// Converts a failed repository write into the matching HTTP error.
    ///
    /// # Arguments
    /// - `err` - The repository failure
    /// - `message` - Client-facing diagnostic naming the record that could not be written
    ///
    /// # Returns
    /// - `AppError::BadRequest` - The record failed validation
    /// - `AppError::NotFound` - The targeted row does not exist
    /// - `AppError::WriteFailed` - Constraint violations and store failures
    pub fn from_write(err: RepositoryError, message: impl Into<String>) -> Self {
        match err {
            RepositoryError::Validation(msg) => Self::BadRequest(msg),
            err @ RepositoryError::NotFound { .. } => Self::NotFound(err.to_string()),
            source => Self::WriteFailed {
                message: message.into(),
                source,
            },
        }
    }

    /// Converts a failed repository delete into the matching HTTP error.
    ///
    /// Same as [`AppError::from_write`] except that a constraint violation means another
    /// row still references the record, which is reported as a conflict.
    pub fn from_delete(err: RepositoryError, message: impl Into<String>) -> Self {
        match err {
            RepositoryError::ConstraintViolation(reason) => {
                tracing::warn!("Delete blocked by constraint: {}", reason);
                Self::Conflict(message.into())
            }
            err => Self::from_write(err, message),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and repository validation failures
/// - 404 Not Found - For `NotFound` and repository lookups of missing rows
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For `WriteFailed` (with its message) and every other
///   variant (with a generic message)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::RepositoryErr(RepositoryError::Validation(msg)) => {
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            Self::RepositoryErr(err @ RepositoryError::NotFound { .. }) => {
                error_response(StatusCode::NOT_FOUND, err.to_string())
            }
            Self::WriteFailed { message, source } => {
                tracing::error!("{}: {}", message, source);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
