//! sea-orm entities for the Pantry database schema.

pub mod prelude;

pub mod ingredient;
pub mod pantry_auth_token;
pub mod pantry_user;
pub mod recipe;
pub mod tag;
