use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Values for a new user row, the email is expected to be normalized and the password hashed
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    pub async fn create(&self, new_user: NewUser) -> Result<entity::pantry_user::Model, DbErr> {
        let user = entity::pantry_user::ActiveModel {
            email: ActiveValue::Set(new_user.email),
            password: ActiveValue::Set(new_user.password_hash),
            name: ActiveValue::Set(new_user.name),
            is_active: ActiveValue::Set(true),
            is_staff: ActiveValue::Set(new_user.is_staff),
            is_superuser: ActiveValue::Set(new_user.is_superuser),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::pantry_user::Model>, DbErr> {
        entity::prelude::PantryUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by exact match on the already normalized email
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::pantry_user::Model>, DbErr> {
        entity::prelude::PantryUser::find()
            .filter(entity::pantry_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates the name and/or password hash of a user, fields set to `None` are left unchanged
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user exists with the provided ID
    /// - `Err(DbErr)` - A database-related error occurred
    pub async fn update(
        &self,
        user_id: i32,
        name: Option<String>,
        password_hash: Option<String>,
    ) -> Result<Option<entity::pantry_user::Model>, DbErr> {
        let user = match entity::prelude::PantryUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(name) = name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(password_hash) = password_hash {
            user_am.password = ActiveValue::Set(password_hash);
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
