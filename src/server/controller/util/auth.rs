use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel},
    service::auth::TokenService,
};

/// Keyword preceding the key in the `Authorization` header
pub static TOKEN_KEYWORD: &str = "Token";

/// The active user owning the token sent as `Authorization: Token <key>`.
///
/// Rejects the request with 401 when the header is absent, malformed or the token is
/// unknown or belongs to an inactive user.
pub struct AuthenticatedUser(pub UserModel);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let key = token_from_headers(&parts.headers)?;

        let user = TokenService::new(&state.db).authenticate(&key).await?;

        Ok(Self(user))
    }
}

/// Extracts the token key from the `Authorization` header.
///
/// # Returns
/// - `Ok(String)` - The token key
/// - `Err(AuthError::NotAuthenticated)` - No header, or a header for another scheme
/// - `Err(AuthError::InvalidTokenHeader)` - The keyword is not followed by exactly one key
pub fn token_from_headers(headers: &HeaderMap) -> Result<String, AuthError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Err(AuthError::NotAuthenticated);
    };

    let value = value.to_str().map_err(|_| AuthError::InvalidTokenHeader)?;
    let mut parts = value.split_whitespace();

    match parts.next() {
        Some(keyword) if keyword.eq_ignore_ascii_case(TOKEN_KEYWORD) => {}
        _ => return Err(AuthError::NotAuthenticated),
    }

    match (parts.next(), parts.next()) {
        (Some(key), None) => Ok(key.to_string()),
        _ => Err(AuthError::InvalidTokenHeader),
    }
}
