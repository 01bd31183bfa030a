use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pantry::{
    model::user::CreateUserDto,
    server::{
        controller::{user::create_user, util::json::ApiJson},
        data::user::UserRepository,
        model::app::AppState,
        service::user::UserService,
    },
};

use super::*;

fn payload(email: &str, password: &str, name: &str) -> CreateUserDto {
    CreateUserDto {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        name: Some(name.to_string()),
    }
}

#[tokio::test]
/// Expect 201 created with email & name but never the password
async fn returns_created_for_valid_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = create_user(
        State(state),
        ApiJson(payload("test@nikhil.com", "nikhil123", "Nikhil Khandelwal")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["email"], "test@nikhil.com");
    assert_eq!(body["name"], "Nikhil Khandelwal");
    assert!(body.get("password").is_none());

    let user = UserRepository::new(&test.db)
        .find_by_email("test@nikhil.com")
        .await?
        .unwrap();
    assert!(UserService::check_password(&user, "nikhil123"));

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the email is already registered
async fn returns_bad_request_for_existing_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("test@nikhil.com")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let result = create_user(
        State(state),
        ApiJson(payload("test@nikhil.com", "nikhil123", "Nikhil Khandelwal")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request and no stored user for a password under 5 characters
async fn returns_bad_request_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = create_user(
        State(state),
        ApiJson(payload("test@nikhil.com", "pw", "Nikhil Khandelwal")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let user = UserRepository::new(&test.db)
        .find_by_email("test@nikhil.com")
        .await?;
    assert!(user.is_none());

    Ok(())
}
