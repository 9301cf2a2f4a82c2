//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in food-core.

mod error;
mod food_post;
mod profile;

pub use food_post::PgFoodPostRepository;
pub use profile::PgProfileRepository;
