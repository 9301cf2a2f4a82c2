//! # food-core
//!
//! Domain layer for the campus food-share service: food posts, participant
//! sets, the participation toggle rule, read-side projections, the map overlay
//! registry, and the repository traits the infrastructure layer implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod map;
pub mod participation;
pub mod projection;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{FoodPost, Profile};
pub use error::DomainError;
pub use map::{MarkerColor, Overlay, OverlayRegistry};
pub use participation::{should_auto_expire, ToggleOutcome, AUTO_EXPIRY_THRESHOLD};
pub use projection::{partition, time_status, PostFeed, PostStatus};
pub use traits::{FoodPostRepository, ProfileRepository, RepoResult};
pub use value_objects::{
    Actor, Coordinates, IdParseError, ParticipantSet, ParticipationField, PostId, UserId,
};
