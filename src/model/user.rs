use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of a user, the password is never serialized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub email: String,
    pub name: String,
}

impl From<entity::pantry_user::Model> for UserDto {
    fn from(user: entity::pantry_user::Model) -> Self {
        Self {
            email: user.email,
            name: user.name,
        }
    }
}

/// Payload to register a new user
///
/// Fields are optional so that missing values are reported as validation errors
/// rather than deserialization failures.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Partial update of the authenticated user
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Credentials exchanged for an API token
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTokenDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    /// Token to send as `Authorization: Token <token>`
    pub token: String,
}
