use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pantry::{
    model::recipe::CreateRecipeDto,
    server::{
        controller::{
            recipe::{create_recipe, get_recipe, list_recipes},
            util::{auth::AuthenticatedUser, json::ApiJson},
        },
        model::app::AppState,
    },
};
use rust_decimal::Decimal;

use super::*;

#[tokio::test]
/// Expect 201 created with the price serialized to two decimal places
async fn creates_recipe() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let state: AppState = test.to_app_state();

    let result = create_recipe(
        State(state),
        AuthenticatedUser(user_model),
        ApiJson(CreateRecipeDto {
            title: Some("Chocolate cheesecake".to_string()),
            time_minutes: Some(30),
            price: Some(Decimal::new(5, 0)),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["title"], "Chocolate cheesecake");
    assert_eq!(body["time_minutes"], 30);
    assert_eq!(body["price"], "5.00");

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the price is missing
async fn returns_bad_request_without_price() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let state: AppState = test.to_app_state();

    let result = create_recipe(
        State(state),
        AuthenticatedUser(user_model),
        ApiJson(CreateRecipeDto {
            title: Some("Chocolate cheesecake".to_string()),
            time_minutes: Some(30),
            price: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect only the caller's recipes in the list
async fn lists_recipes_of_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let other_user_model = test.user().insert_user("other@example.com").await?;
    let recipe_model = test.recipe().insert_recipe(user_model.id, "Soup").await?;
    test.recipe()
        .insert_recipe(other_user_model.id, "Salad")
        .await?;
    let state: AppState = test.to_app_state();

    let result = list_recipes(State(state), AuthenticatedUser(user_model)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], recipe_model.id);
    assert_eq!(body[0]["price"], "5.00");

    Ok(())
}

#[tokio::test]
/// Expect 200 success for a recipe owned by the user
async fn returns_recipe_of_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let recipe_model = test.recipe().insert_recipe(user_model.id, "Soup").await?;
    let state: AppState = test.to_app_state();

    let result = get_recipe(
        State(state),
        AuthenticatedUser(user_model),
        Path(recipe_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["title"], "Soup");

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a recipe owned by another user
async fn returns_not_found_for_recipe_of_other_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let other_user_model = test.user().insert_user("other@example.com").await?;
    let recipe_model = test
        .recipe()
        .insert_recipe(other_user_model.id, "Salad")
        .await?;
    let state: AppState = test.to_app_state();

    let result = get_recipe(
        State(state),
        AuthenticatedUser(user_model),
        Path(recipe_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
