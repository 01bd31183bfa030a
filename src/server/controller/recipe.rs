use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        recipe::{
            CreateIngredientDto, CreateRecipeDto, CreateTagDto, IngredientDto, RecipeDto, TagDto,
        },
    },
    server::{
        controller::util::{auth::AuthenticatedUser, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::{ingredient::IngredientService, recipe::RecipeService, tag::TagService},
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// List the tags of the authenticated user, ordered by name descending
#[utoipa::path(
    get,
    path = "/api/recipe/tags",
    tag = RECIPE_TAG,
    security(("token" = [])),
    responses(
        (status = 200, description = "Tags of the user", body = Vec<TagDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tags(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let tags = TagService::new(&state.db).list(user.id).await?;

    Ok((StatusCode::OK, Json(tags)))
}

/// Create a tag owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/recipe/tags",
    tag = RECIPE_TAG,
    security(("token" = [])),
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Payload rejected", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<CreateTagDto>,
) -> Result<impl IntoResponse, Error> {
    let tag = TagService::new(&state.db).create(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(tag)))
}

/// List the ingredients of the authenticated user
///
/// Only ingredients owned by the caller are returned, ordered by name descending.
///
/// # Responses
/// - 200 (OK): Ingredients of the user as `{id, name}` objects
/// - 401 (Unauthorized): Missing or invalid token
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/recipe/ingredients",
    tag = RECIPE_TAG,
    security(("token" = [])),
    responses(
        (status = 200, description = "Ingredients of the user", body = Vec<IngredientDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let ingredients = IngredientService::new(&state.db).list(user.id).await?;

    Ok((StatusCode::OK, Json(ingredients)))
}

/// Create an ingredient owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/recipe/ingredients",
    tag = RECIPE_TAG,
    security(("token" = [])),
    request_body = CreateIngredientDto,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientDto),
        (status = 400, description = "Payload rejected", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<CreateIngredientDto>,
) -> Result<impl IntoResponse, Error> {
    let ingredient = IngredientService::new(&state.db)
        .create(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(ingredient)))
}

/// List the recipes of the authenticated user, newest first
#[utoipa::path(
    get,
    path = "/api/recipe/recipes",
    tag = RECIPE_TAG,
    security(("token" = [])),
    responses(
        (status = 200, description = "Recipes of the user", body = Vec<RecipeDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let recipes = RecipeService::new(&state.db).list(user.id).await?;

    Ok((StatusCode::OK, Json(recipes)))
}

/// Create a recipe owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/recipe/recipes",
    tag = RECIPE_TAG,
    security(("token" = [])),
    request_body = CreateRecipeDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Payload rejected", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<CreateRecipeDto>,
) -> Result<impl IntoResponse, Error> {
    let recipe = RecipeService::new(&state.db).create(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get a recipe of the authenticated user
///
/// # Responses
/// - 200 (OK): The recipe
/// - 401 (Unauthorized): Missing or invalid token
/// - 404 (Not Found): No recipe with this ID is owned by the user
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/recipe/recipes/{id}",
    tag = RECIPE_TAG,
    security(("token" = [])),
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "The recipe", body = RecipeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(recipe) = RecipeService::new(&state.db).get(user.id, recipe_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(recipe)).into_response())
}
