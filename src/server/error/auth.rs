use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication credentials were not provided")]
    NotAuthenticated,
    #[error("Invalid token header, expected `Authorization: Token <key>`")]
    InvalidTokenHeader,
    #[error("Invalid token")]
    InvalidToken,
    #[error("User ID {0:?} presented a valid token but is inactive")]
    UserInactive(i32),
    #[error("Must include \"email\" and \"password\"")]
    MissingCredentials,
    #[error("Unable to authenticate with provided credentials")]
    InvalidCredentials,
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Token")],
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }

    fn bad_request(message: String) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotAuthenticated | Self::InvalidTokenHeader | Self::InvalidToken => {
                Self::unauthorized(&self.to_string())
            }
            Self::UserInactive(_) => Self::unauthorized("User inactive or deleted"),
            Self::MissingCredentials | Self::InvalidCredentials => {
                Self::bad_request(self.to_string())
            }
        }
    }
}
