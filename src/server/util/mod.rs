//! Helpers shared by the service layer.
//!
//! - `email` - email normalization and format checks
//! - `password` - argon2 password hashing
//! - `token` - random API token keys

pub mod email;
pub mod password;
pub mod token;
