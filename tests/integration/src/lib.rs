//! Integration test utilities for the food-share API
//!
//! Boots the full axum app in-process and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
