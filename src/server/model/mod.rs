//! Server application models and type definitions.
//!
//! This module contains the application state shared with every handler and type aliases
//! for the sea-orm models of the `entity` crate.

pub mod app;
pub mod db;
