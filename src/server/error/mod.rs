//! Error types for the Pantry server.
//!
//! This module provides the error handling system with specialized error types for
//! authentication, configuration and payload validation. All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for the `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the Pantry server.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type so that `?` works across the controller, service and data layers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (credentials, token header, token lookup)
/// - Validation errors (request payload rejected)
/// - External library errors (database, IO, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing credentials, invalid token).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Validation error for a request payload or model field.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Password hashing failed, the argon2 error type does not implement `std::error::Error`.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug in Pantry's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and rejected token credentials
/// - 401 Unauthorized - Missing or invalid API token
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// A request body that failed to parse is a client error, reported like any other validation
/// failure.
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(ValidationError::MalformedBody(rejection.body_text()))
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
