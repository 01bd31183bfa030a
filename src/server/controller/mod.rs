//! HTTP controller endpoints for the Pantry web API.
//!
//! Axum handlers for account creation, token authentication and the recipe resources owned
//! by the authenticated user. Controllers extract request data, call into the service layer
//! and map results to HTTP responses, each handler carries a utoipa path for the OpenAPI
//! document.

pub mod auth;
pub mod recipe;
pub mod user;
pub mod util;
