//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for query inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain values to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::PostView;
pub use requests::{ListPostsQuery, MapMarkersQuery, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
pub use responses::{
    ApiResponse, AuthorResponse, HealthChecks, HealthResponse, MarkerResponse, PostResponse,
    ReadinessResponse, ToggleResponse, ViewerState,
};
