//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over sea-orm queries, organized by domain.
//! Each repository borrows any [`sea_orm::ConnectionTrait`] so the same code runs against
//! a pooled connection or inside a transaction. Tags, ingredients and recipes are always
//! queried through their owning user.

pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod token;
pub mod user;
