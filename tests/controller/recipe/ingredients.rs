use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pantry::{
    model::recipe::CreateIngredientDto,
    server::{
        controller::{
            recipe::{create_ingredient, list_ingredients},
            util::{auth::AuthenticatedUser, json::ApiJson},
        },
        model::app::AppState,
    },
};
use serde_json::json;

use super::*;

#[tokio::test]
/// Expect only the caller's ingredients, ordered by name descending
async fn lists_ingredients_of_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let other_user_model = test.user().insert_user("user2@example.com").await?;
    let kale = test.recipe().insert_ingredient(user_model.id, "Kale").await?;
    let salt = test.recipe().insert_ingredient(user_model.id, "Salt").await?;
    test.recipe()
        .insert_ingredient(other_user_model.id, "Vinegar")
        .await?;
    let state: AppState = test.to_app_state();

    let result = list_ingredients(State(state), AuthenticatedUser(user_model)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body,
        json!([
            { "id": salt.id, "name": "Salt" },
            { "id": kale.id, "name": "Kale" },
        ])
    );

    Ok(())
}

#[tokio::test]
/// Expect a single result when another user also owns ingredients
async fn limits_ingredients_to_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let other_user_model = test.user().insert_user("other@example.com").await?;
    test.recipe()
        .insert_ingredient(other_user_model.id, "Vinegar")
        .await?;
    let ingredient = test
        .recipe()
        .insert_ingredient(user_model.id, "Tumeric")
        .await?;
    let state: AppState = test.to_app_state();

    let result = list_ingredients(State(state), AuthenticatedUser(user_model)).await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], ingredient.name);
    assert_eq!(body[0]["id"], ingredient.id);

    Ok(())
}

#[tokio::test]
/// Expect 201 created for a named ingredient
async fn creates_ingredient() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let state: AppState = test.to_app_state();

    let result = create_ingredient(
        State(state),
        AuthenticatedUser(user_model),
        ApiJson(CreateIngredientDto {
            name: Some("Cabbage".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Cabbage");

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a blank name
async fn returns_bad_request_for_blank_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let state: AppState = test.to_app_state();

    let result = create_ingredient(
        State(state),
        AuthenticatedUser(user_model),
        ApiJson(CreateIngredientDto {
            name: Some(" ".to_string()),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
