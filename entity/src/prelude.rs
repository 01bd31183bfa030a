pub use super::ingredient::Entity as Ingredient;
pub use super::pantry_auth_token::Entity as PantryAuthToken;
pub use super::pantry_user::Entity as PantryUser;
pub use super::recipe::Entity as Recipe;
pub use super::tag::Entity as Tag;
