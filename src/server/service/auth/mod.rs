//! Token authentication service.
//!
//! Exchanges user credentials for an opaque API token and resolves tokens presented in
//! the `Authorization` header back to the owning user. A user owns at most one token,
//! repeated logins return the same key.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{CreateTokenDto, TokenDto},
    server::{
        data::{token::TokenRepository, user::UserRepository},
        error::{auth::AuthError, Error},
        model::db::{AuthTokenModel, UserModel},
        service::user::UserService,
        util::{email::normalize_email, token::generate_token_key},
    },
};

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    /// Creates a new instance of [`TokenService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the token of the user matching the credentials, issuing one if needed.
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - Token of the authenticated user
    /// - `Err(Error::AuthError(MissingCredentials))` - Email or password missing or empty
    /// - `Err(Error::AuthError(InvalidCredentials))` - Unknown email, wrong password or
    ///   inactive user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_token(&self, payload: CreateTokenDto) -> Result<TokenDto, Error> {
        let (email, password) = match (payload.email, payload.password) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                (normalize_email(&email), password)
            }
            _ => return Err(AuthError::MissingCredentials.into()),
        };

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !user.is_active || !UserService::check_password(&user, &password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = match TokenRepository::new(self.db)
            .get_by_user_id(user.id)
            .await?
        {
            Some(token) => token,
            None => self.issue_token(user.id).await?,
        };

        Ok(TokenDto { token: token.key })
    }

    /// Inserts a new token for the user.
    ///
    /// When a concurrent login issued a token first, the unique `user_id` constraint rejects
    /// the insert and that token is returned instead.
    async fn issue_token(&self, user_id: i32) -> Result<AuthTokenModel, Error> {
        let token_repo = TokenRepository::new(self.db);

        match token_repo.create(user_id, generate_token_key()).await {
            Ok(token) => {
                tracing::info!(user_id = %user_id, "Issued auth token");

                Ok(token)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!(user_id = %user_id, "Auth token issued concurrently, reusing it");

                token_repo.get_by_user_id(user_id).await?.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Token of user ID {} missing after unique violation",
                        user_id
                    ))
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Resolves a token key to the active user owning it.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The user the token belongs to
    /// - `Err(Error::AuthError(InvalidToken))` - No token exists with this key
    /// - `Err(Error::AuthError(UserInactive))` - The owning user is deactivated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn authenticate(&self, key: &str) -> Result<UserModel, Error> {
        let Some((_, maybe_user)) = TokenRepository::new(self.db)
            .get_with_user_by_key(key)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        // Token rows cascade with their user so the join always finds one
        let user = maybe_user.ok_or(AuthError::InvalidToken)?;

        if !user.is_active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        Ok(user)
    }
}
