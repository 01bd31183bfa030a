use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pantry::{
    model::user::UpdateUserDto,
    server::{
        controller::{
            user::{get_current_user, update_current_user},
            util::{auth::AuthenticatedUser, json::ApiJson},
        },
        data::user::UserRepository,
        model::app::AppState,
        service::user::UserService,
    },
};

use super::*;

#[tokio::test]
/// Expect 200 success with the authenticated user's email and name
async fn returns_current_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test.user().insert_user("test@example.com").await?;
    let state: AppState = test.to_app_state();

    let result = get_current_user(State(state), AuthenticatedUser(user_model)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["email"], "test@example.com");
    assert_eq!(body["name"], "Test User");

    Ok(())
}

#[tokio::test]
/// Expect 200 success with the new name and a password that verifies
async fn updates_current_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user_model = test.user().insert_user("test@example.com").await?;
    let user_id = user_model.id;
    let state: AppState = test.to_app_state();

    let result = update_current_user(
        State(state),
        AuthenticatedUser(user_model),
        ApiJson(UpdateUserDto {
            name: Some("Updated Name".to_string()),
            password: Some("newpassword123".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Updated Name");

    let user = UserRepository::new(&test.db)
        .get_by_id(user_id)
        .await?
        .unwrap();
    assert!(UserService::check_password(&user, "newpassword123"));

    Ok(())
}
