//! Pantry, a recipe management REST API.
//!
//! Users register with an email address and password, exchange those credentials for an
//! API token, and manage their own tags, ingredients and recipes. The [`server`] module holds
//! the HTTP layer, services and repositories while [`model`] holds the JSON DTOs shared by
//! every endpoint.

pub mod model;
pub mod server;
