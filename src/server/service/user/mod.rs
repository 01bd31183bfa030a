//! User service layer.
//!
//! Business logic for user accounts: the `create_user`/`create_superuser` factories used by
//! startup and fixtures, API registration with payload validation, and profile updates.


use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{validation::ValidationError, Error},
        model::db::UserModel,
        service::validation,
        util::{
            email::{is_valid_email, normalize_email},
            password::{hash_password, verify_password},
        },
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a regular user.
    ///
    /// The email is normalized and the password hashed before storage. Unlike
    /// [`UserService::register`] no password policy is applied.
    ///
    /// # Arguments
    /// - `email` - Email of the user, normalized before storage
    /// - `password` - Plain password, stored as an argon2 hash
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::ValidationError(EmailRequired))` - The email is empty
    /// - `Err(Error::ValidationError(EmailTaken))` - A user already has this email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserModel, Error> {
        self.create(email, password, name, false).await
    }

    /// Creates a user with both the staff and superuser flags set.
    pub async fn create_superuser(&self, email: &str, password: &str) -> Result<UserModel, Error> {
        self.create(email, password, "", true).await
    }

    async fn create(
        &self,
        email: &str,
        password: &str,
        name: &str,
        is_admin: bool,
    ) -> Result<UserModel, Error> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::EmailRequired.into());
        }

        let password_hash = hash_password(password)?;

        let result = UserRepository::new(self.db)
            .create(NewUser {
                email,
                password_hash,
                name: name.to_string(),
                is_staff: is_admin,
                is_superuser: is_admin,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!(
                    user_id = %user.id,
                    is_superuser = user.is_superuser,
                    "Created user"
                );

                Ok(user)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ValidationError::EmailTaken.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Registers a user from an API payload.
    ///
    /// Requires a valid email that isn't registered yet, a password of at least
    /// [`validation::MIN_PASSWORD_LENGTH`] characters and a name.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user, without the password
    /// - `Err(Error::ValidationError)` - The payload was rejected, nothing was stored
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        let email = payload
            .email
            .as_deref()
            .map(normalize_email)
            .filter(|email| !email.is_empty())
            .ok_or(ValidationError::FieldRequired("email"))?;

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if email.chars().count() > validation::MAX_TEXT_LENGTH {
            return Err(ValidationError::FieldTooLong {
                field: "email",
                max: validation::MAX_TEXT_LENGTH,
            }
            .into());
        }

        let password = payload
            .password
            .filter(|password| !password.is_empty())
            .ok_or(ValidationError::FieldRequired("password"))?;
        validation::password(&password)?;

        let name = validation::required_text(payload.name, "name")?;

        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(ValidationError::EmailTaken.into());
        }

        let user = self.create_user(&email, &password, &name).await?;

        Ok(UserDto::from(user))
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Updates the name and/or password of a user, omitted fields are left unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The updated user
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::ValidationError)` - Blank name or too short password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_user(
        &self,
        user_id: i32,
        payload: UpdateUserDto,
    ) -> Result<Option<UserDto>, Error> {
        let name = payload
            .name
            .map(|name| validation::text(name, "name"))
            .transpose()?;

        let password_hash = match payload.password {
            Some(password) => {
                validation::password(&password)?;
                Some(hash_password(&password)?)
            }
            None => None,
        };

        let user = UserRepository::new(self.db)
            .update(user_id, name, password_hash)
            .await?;

        if let Some(user) = &user {
            tracing::debug!(user_id = %user.id, "Updated user");
        }

        Ok(user.map(UserDto::from))
    }

    /// Returns true when the password matches the user's stored hash.
    pub fn check_password(user: &UserModel, password: &str) -> bool {
        verify_password(password, &user.password)
    }
}
