//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod map;
pub mod participation;
pub mod posts;
