use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::recipe::{CreateIngredientDto, IngredientDto},
    server::{data::ingredient::IngredientRepository, error::Error, service::validation},
};

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    /// Creates a new instance of [`IngredientService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the ingredients of a user, ordered by name descending
    ///
    /// # Returns
    /// - `Ok(Vec<IngredientDto>)` - Ingredients owned by the user, empty if there are none
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self, user_id: i32) -> Result<Vec<IngredientDto>, Error> {
        let ingredients = IngredientRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(ingredients.into_iter().map(IngredientDto::from).collect())
    }

    /// Creates an ingredient owned by the user, the name is required and trimmed
    pub async fn create(
        &self,
        user_id: i32,
        payload: CreateIngredientDto,
    ) -> Result<IngredientDto, Error> {
        let name = validation::required_text(payload.name, "name")?;

        let ingredient = IngredientRepository::new(self.db)
            .create(user_id, name)
            .await?;
        tracing::debug!(
            user_id = %user_id,
            ingredient_id = %ingredient.id,
            "Created ingredient"
        );

        Ok(IngredientDto::from(ingredient))
    }
}
