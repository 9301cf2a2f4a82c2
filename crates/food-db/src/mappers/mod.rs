//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read from PostgreSQL.

mod food_post;
mod profile;

pub use food_post::{participants_from_column, participants_to_column};
