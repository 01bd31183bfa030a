//! Recipe service.
//!
//! Recipes are always scoped to their owner: listing and lookups never return recipes of
//! another user, a foreign recipe ID behaves like a missing one.

use dioxus_logger::tracing;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::recipe::{CreateRecipeDto, RecipeDto},
    server::{
        data::recipe::{NewRecipe, RecipeRepository},
        error::{validation::ValidationError, Error},
        service::validation,
    },
};

/// Number of decimal places stored for a price
const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound of a price, the column holds 5 digits with 2 decimal places
const MAX_PRICE: Decimal = Decimal::ONE_THOUSAND;

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of [`RecipeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the recipes of a user, newest first
    pub async fn list(&self, user_id: i32) -> Result<Vec<RecipeDto>, Error> {
        let recipes = RecipeRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(recipes.into_iter().map(RecipeDto::from).collect())
    }

    /// Gets a recipe owned by the user
    ///
    /// # Returns
    /// - `Ok(Some(RecipeDto))` - Recipe found
    /// - `Ok(None)` - Recipe not found or owned by another user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, user_id: i32, recipe_id: i32) -> Result<Option<RecipeDto>, Error> {
        let recipe = RecipeRepository::new(self.db)
            .get_by_id_for_user(recipe_id, user_id)
            .await?;

        Ok(recipe.map(RecipeDto::from))
    }

    /// Creates a recipe owned by the user
    ///
    /// Requires a title, a non-negative preparation time and a non-negative price below
    /// 1000 with at most two decimal places.
    pub async fn create(
        &self,
        user_id: i32,
        payload: CreateRecipeDto,
    ) -> Result<RecipeDto, Error> {
        let title = validation::required_text(payload.title, "title")?;

        let time_minutes = payload
            .time_minutes
            .ok_or(ValidationError::FieldRequired("time_minutes"))?;
        if time_minutes < 0 {
            return Err(ValidationError::InvalidValue {
                field: "time_minutes",
                reason: "must not be negative".to_string(),
            }
            .into());
        }

        let price = payload
            .price
            .ok_or(ValidationError::FieldRequired("price"))?;
        let price = validate_price(price)?;

        let recipe = RecipeRepository::new(self.db)
            .create(
                user_id,
                NewRecipe {
                    title,
                    time_minutes,
                    price,
                },
            )
            .await?;
        tracing::debug!(user_id = %user_id, recipe_id = %recipe.id, "Created recipe");

        Ok(RecipeDto::from(recipe))
    }
}

fn validate_price(price: Decimal) -> Result<Decimal, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidValue {
        field: "price",
        reason: reason.to_string(),
    };

    if price.is_sign_negative() && !price.is_zero() {
        return Err(invalid("must not be negative"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(invalid("must have no more than 2 decimal places"));
    }
    if price >= MAX_PRICE {
        return Err(invalid("must be less than 1000"));
    }

    let mut price = price;
    price.rescale(PRICE_SCALE);

    Ok(price)
}
