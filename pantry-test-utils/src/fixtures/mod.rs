//! Test fixture modules for database record creation.
//!
//! - `user` - Pantry users and auth tokens
//! - `recipe` - Tags, ingredients and recipes owned by a user

pub mod recipe;
pub mod user;
