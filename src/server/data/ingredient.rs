use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    /// Creates a new instance of [`IngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        name: String,
    ) -> Result<entity::ingredient::Model, DbErr> {
        let ingredient = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(name),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        ingredient.insert(self.db).await
    }

    /// Gets all ingredients owned by the user, ordered by name descending
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::UserId.eq(user_id))
            .order_by_desc(entity::ingredient::Column::Name)
            .all(self.db)
            .await
    }
}
