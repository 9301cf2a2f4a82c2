//! # food-service
//!
//! Application layer containing the participation toggle, post listings,
//! owner actions, map marker layout, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    HealthResponse, ListPostsQuery, MapMarkersQuery, MarkerResponse, PostResponse,
    ReadinessResponse, ToggleResponse,
};
pub use services::{
    MapService, ParticipationService, PostService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, ToggleResult,
};
