use sea_orm::{prelude::Decimal, ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn recipe<'a>(&'a mut self) -> RecipeFixtures<'a> {
        RecipeFixtures { setup: self }
    }
}

pub struct RecipeFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> RecipeFixtures<'a> {
    pub async fn insert_tag(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<entity::tag::Model, TestError> {
        Ok(entity::prelude::Tag::insert(entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_ingredient(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<entity::ingredient::Model, TestError> {
        Ok(
            entity::prelude::Ingredient::insert(entity::ingredient::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a recipe with a 10 minute preparation time and a price of 5.00
    pub async fn insert_recipe(
        &self,
        user_id: i32,
        title: &str,
    ) -> Result<entity::recipe::Model, TestError> {
        Ok(entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            time_minutes: ActiveValue::Set(10),
            price: ActiveValue::Set(Decimal::new(500, 2)),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
