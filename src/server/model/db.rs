//! Database model type aliases.
//!
//! Short names for the sea-orm models generated in the `entity` crate.

/// Type alias for a Pantry user.
///
/// # Fields (from `entity::pantry_user::Model`)
/// - `id` - Primary key
/// - `email` - Normalized, unique login email
/// - `password` - Argon2 PHC hash of the password
/// - `name` - Display name
/// - `is_active` - Inactive users cannot obtain or use tokens
/// - `is_staff` / `is_superuser` - Administrative flags
/// - `created_at` - Timestamp when the user was created
pub type UserModel = entity::pantry_user::Model;


/// Type alias for an API token, each user owns at most one.
pub type AuthTokenModel = entity::pantry_auth_token::Model;
