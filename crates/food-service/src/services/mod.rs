//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of one
//! request and talks to the store only through the repository traits.

pub mod context;
pub mod error;
pub mod map;
pub mod participation;
pub mod post;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use map::MapService;
pub use participation::{ParticipationService, ToggleResult};
pub use post::PostService;
