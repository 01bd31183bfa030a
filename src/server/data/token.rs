use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct TokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TokenRepository<'a, C> {
    /// Creates a new instance of [`TokenRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a token key for a user, fails if the user already owns a token
    pub async fn create(
        &self,
        user_id: i32,
        key: String,
    ) -> Result<entity::pantry_auth_token::Model, DbErr> {
        let token = entity::pantry_auth_token::ActiveModel {
            key: ActiveValue::Set(key),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        token.insert(self.db).await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::pantry_auth_token::Model>, DbErr> {
        entity::prelude::PantryAuthToken::find()
            .filter(entity::pantry_auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Get a token along with the user owning it
    pub async fn get_with_user_by_key(
        &self,
        key: &str,
    ) -> Result<
        Option<(
            entity::pantry_auth_token::Model,
            Option<entity::pantry_user::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::PantryAuthToken::find_by_id(key.to_string())
            .find_also_related(entity::pantry_user::Entity)
            .one(self.db)
            .await
    }
}
