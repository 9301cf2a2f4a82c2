//! Domain entities - core business objects

mod food_post;
mod profile;

pub use food_post::FoodPost;
pub use profile::Profile;
