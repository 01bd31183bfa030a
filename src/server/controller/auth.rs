use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateTokenDto, TokenDto},
    },
    server::{
        controller::util::json::ApiJson, error::Error, model::app::AppState,
        service::auth::TokenService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Exchange an email and password for an API token
///
/// Returns the user's existing token if one was issued before.
///
/// # Responses
/// - 200 (OK): The token to send as `Authorization: Token <token>`
/// - 400 (Bad Request): Missing fields, unknown email, wrong password or inactive user
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/api/token/create",
    tag = AUTH_TAG,
    request_body = CreateTokenDto,
    responses(
        (status = 200, description = "Token for the provided credentials", body = TokenDto),
        (status = 400, description = "Credentials missing or rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_token(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTokenDto>,
) -> Result<impl IntoResponse, Error> {
    let token = TokenService::new(&state.db).create_token(payload).await?;

    Ok((StatusCode::OK, Json(token)))
}
