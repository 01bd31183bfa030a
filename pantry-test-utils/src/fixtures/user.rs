use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_TOKEN_KEY, UNUSABLE_PASSWORD},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active, non-staff user whose password never verifies.
    pub async fn insert_user(
        &self,
        email: &str,
    ) -> Result<entity::pantry_user::Model, TestError> {
        Ok(
            entity::prelude::PantryUser::insert(entity::pantry_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(UNUSABLE_PASSWORD.to_string()),
                name: ActiveValue::Set("Test User".to_string()),
                is_active: ActiveValue::Set(true),
                is_staff: ActiveValue::Set(false),
                is_superuser: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an auth token for the user, using [`TEST_TOKEN_KEY`] unless a key is given.
    pub async fn insert_token(
        &self,
        user_id: i32,
        key: Option<&str>,
    ) -> Result<entity::pantry_auth_token::Model, TestError> {
        Ok(entity::prelude::PantryAuthToken::insert(
            entity::pantry_auth_token::ActiveModel {
                key: ActiveValue::Set(key.unwrap_or(TEST_TOKEN_KEY).to_string()),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_user_with_token(
        &self,
        email: &str,
    ) -> Result<
        (
            entity::pantry_user::Model,
            entity::pantry_auth_token::Model,
        ),
        TestError,
    > {
        let user_model = self.insert_user(email).await?;
        let token_model = self.insert_token(user_model.id, None).await?;

        Ok((user_model, token_model))
    }
}
