//! Requests sent through the full router, covering the token extractor.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pantry::server::{model::app::AppState, router::routes};
use pantry_test_utils::constant::TEST_TOKEN_KEY;
use serde_json::json;
use tower::ServiceExt;

use super::*;

fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state::<AppState>())
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {}", token));
    }

    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
/// Expect 401 unauthorized when listing ingredients without a token
async fn ingredients_require_authentication() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/recipe/ingredients", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers()[header::WWW_AUTHENTICATE], "Token");

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a token that was never issued
async fn rejects_unknown_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/recipe/ingredients", Some("unknown")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with the caller's ingredients for a valid token
async fn lists_ingredients_with_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let (user_model, _) = test
        .user()
        .insert_user_with_token("user@example.com")
        .await?;
    let ingredient = test
        .recipe()
        .insert_ingredient(user_model.id, "Kale")
        .await?;

    let resp = app(&test)
        .oneshot(get("/api/recipe/ingredients", Some(TEST_TOKEN_KEY)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, json!([{ "id": ingredient.id, "name": "Kale" }]));

    Ok(())
}

#[tokio::test]
/// Expect a registered user to obtain a token that authenticates requests
async fn registers_and_authenticates() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let resp = app(&test)
        .oneshot(post_json(
            "/api/user/create",
            json!({
                "email": "test@nikhil.com",
                "password": "nikhil123",
                "name": "Nikhil Khandelwal",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app(&test)
        .oneshot(post_json(
            "/api/token/create",
            json!({ "email": "test@nikhil.com", "password": "nikhil123" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let resp = app(&test)
        .oneshot(get("/api/user/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body,
        json!({ "email": "test@nikhil.com", "name": "Nikhil Khandelwal" })
    );

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to list the registered paths
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["paths"]["/api/recipe/ingredients"].is_object());
    assert!(body["components"]["securitySchemes"]["token"].is_object());

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request with an error body when a field has the wrong type
async fn rejects_mistyped_body_with_error_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = app(&test)
        .oneshot(post_json(
            "/api/token/create",
            json!({ "email": 1, "password": "x" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());
    assert!(body.get("token").is_none());

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request with an error body when the content type is missing
async fn rejects_body_without_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/user/create")
        .body(Body::from(
            json!({ "email": "test@nikhil.com", "password": "nikhil123", "name": "Nikhil" })
                .to_string(),
        ))
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}
