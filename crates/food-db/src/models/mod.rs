//! Database models - SQLx-compatible structs for PostgreSQL tables

mod food_post;
mod profile;

pub use food_post::FoodPostModel;
pub use profile::ProfileModel;
