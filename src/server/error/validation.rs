use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request payload or model field was rejected before reaching the database.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Users must have an email address")]
    EmailRequired,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("A user with this email already exists")]
    EmailTaken,
    #[error("Ensure the password has at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("The {0} field is required")]
    FieldRequired(&'static str),
    #[error("Ensure the {field} field has no more than {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("{0}")]
    MalformedBody(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
