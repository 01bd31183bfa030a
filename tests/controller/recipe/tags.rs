use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pantry::{
    model::recipe::CreateTagDto,
    server::{
        controller::{
            recipe::{create_tag, list_tags},
            util::{auth::AuthenticatedUser, json::ApiJson},
        },
        model::app::AppState,
    },
};

use super::*;

#[tokio::test]
/// Expect only the caller's tags, ordered by name descending
async fn lists_tags_of_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let other_user_model = test.user().insert_user("other@example.com").await?;
    test.recipe().insert_tag(user_model.id, "Dessert").await?;
    test.recipe().insert_tag(user_model.id, "Vegan").await?;
    test.recipe().insert_tag(other_user_model.id, "Fruity").await?;
    let state: AppState = test.to_app_state();

    let result = list_tags(State(state), AuthenticatedUser(user_model)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|tag| tag["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Vegan", "Dessert"]);

    Ok(())
}

#[tokio::test]
/// Expect 201 created for a named tag
async fn creates_tag() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let user_model = test.user().insert_user("user@example.com").await?;
    let state: AppState = test.to_app_state();

    let result = create_tag(
        State(state),
        AuthenticatedUser(user_model),
        ApiJson(CreateTagDto {
            name: Some("Breakfast".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Breakfast");

    Ok(())
}
