use sea_orm::{
    prelude::Decimal, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Values for a new recipe row, already validated by the service layer
pub struct NewRecipe {
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        new_recipe: NewRecipe,
    ) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            title: ActiveValue::Set(new_recipe.title),
            time_minutes: ActiveValue::Set(new_recipe.time_minutes),
            price: ActiveValue::Set(new_recipe.price),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    /// Gets all recipes owned by the user, newest first
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::UserId.eq(user_id))
            .order_by_desc(entity::recipe::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a recipe by ID, `None` if it doesn't exist or is owned by another user
    pub async fn get_by_id_for_user(
        &self,
        recipe_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .filter(entity::recipe::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
