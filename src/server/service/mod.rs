//! Service layer for business logic.
//!
//! Services validate and normalize request payloads, hash passwords, issue tokens and map
//! database models to DTOs. They sit between the controllers and the repositories of
//! the data layer and return the unified [`Error`](crate::server::error::Error) type.

pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
pub mod validation;
