use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::util::{auth::AuthenticatedUser, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

fn user_not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "User not found".to_string(),
        }),
    )
        .into_response()
}

/// Register a new user
///
/// # Responses
/// - 201 (Created): The created user, without the password
/// - 400 (Bad Request): Invalid payload, password too short or email already registered
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/api/user/create",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Payload rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = USER_TAG,
    security(("token" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let Some(user) = UserService::new(&state.db).get_user(user.id).await? else {
        return Ok(user_not_found());
    };

    Ok((StatusCode::OK, Json(user)).into_response())
}

/// Update the name and/or password of the authenticated user
///
/// # Responses
/// - 200 (OK): The updated user
/// - 400 (Bad Request): Blank name or password too short
/// - 401 (Unauthorized): Missing or invalid token
/// - 404 (Not Found): The user was deleted while the request was handled
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    patch,
    path = "/api/user/me",
    tag = USER_TAG,
    security(("token" = [])),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 400, description = "Payload rejected", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let Some(updated) = UserService::new(&state.db)
        .update_user(user.id, payload)
        .await?
    else {
        tracing::warn!(user_id = %user.id, "Authenticated user disappeared during update");

        return Ok(user_not_found());
    };

    Ok((StatusCode::OK, Json(updated)).into_response())
}
