//! Utilities for controller request handling.
//!
//! - `auth` - the [`AuthenticatedUser`](auth::AuthenticatedUser) extractor for protected endpoints
//! - `json` - the [`ApiJson`](json::ApiJson) body extractor with JSON error responses

pub mod auth;
pub mod json;
