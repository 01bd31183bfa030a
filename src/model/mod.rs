//! Request and response DTOs serialized over the HTTP API.

pub mod api;
pub mod recipe;
pub mod user;
