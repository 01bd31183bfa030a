//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! the generated document is served as JSON at `/api/docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Registers the `token` security scheme referenced by protected endpoints.
struct TokenSecurity;

impl Modify for TokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Token issued by `/api/token/create`, sent as `Token <key>`",
            ))),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and the OpenAPI document.
///
/// # Registered Endpoints
/// - `POST /api/user/create` - Register a new user
/// - `POST /api/token/create` - Exchange credentials for an API token
/// - `GET|PATCH /api/user/me` - Read or update the authenticated user
/// - `GET|POST /api/recipe/tags` - List or create tags
/// - `GET|POST /api/recipe/ingredients` - List or create ingredients
/// - `GET|POST /api/recipe/recipes` - List or create recipes
/// - `GET /api/recipe/recipes/{id}` - Get a recipe
/// - `GET /api/docs/openapi.json` - OpenAPI document
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, call `with_state` before serving.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Pantry", description = "Pantry recipe API"),
        modifiers(&TokenSecurity),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Token authentication API routes"),
            (name = controller::user::USER_TAG, description = "User account API routes"),
            (name = controller::recipe::RECIPE_TAG, description = "Recipe resource API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::auth::create_token))
        .routes(routes!(
            controller::user::get_current_user,
            controller::user::update_current_user
        ))
        .routes(routes!(
            controller::recipe::list_tags,
            controller::recipe::create_tag
        ))
        .routes(routes!(
            controller::recipe::list_ingredients,
            controller::recipe::create_ingredient
        ))
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(controller::recipe::get_recipe))
        .split_for_parts();

    let openapi_json = move || {
        let api = api.clone();
        async move { Json(api) }
    };

    routes.route("/api/docs/openapi.json", get(openapi_json))
}
