//! Read-side projections over food posts
//!
//! Nothing here owns state beyond what the caller hands in: the active/expired
//! split is recomputed from `expires_at` and the current time on every read.

mod feed;
mod status;

pub use feed::PostFeed;
pub use status::{partition, time_status, PostStatus};
