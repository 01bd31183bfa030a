//! Server application core modules.
//!
//! This module contains all server-side functionality of Pantry: configuration, HTTP
//! routing and controllers, token authentication, the service and data layers and startup.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
