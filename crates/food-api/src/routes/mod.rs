//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, map, participation, posts};
use crate::state::AppState;

/// Create the main API router (health routes are kept apart so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(post_routes()).merge(map_routes())
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        // Listings
        .route("/posts/active", get(posts::list_active))
        .route("/posts/expired", get(posts::list_expired))
        .route("/posts/mine", get(posts::list_mine))
        // Single post
        .route(
            "/posts/:post_id",
            get(posts::get_post).delete(posts::delete_post),
        )
        .route("/posts/:post_id/finish", post(posts::finish_post))
        // Participation
        .route("/posts/:post_id/finished", post(participation::toggle_finished))
        .route("/posts/:post_id/going", post(participation::toggle_going))
}

/// Map routes
fn map_routes() -> Router<AppState> {
    Router::new().route("/map/markers", get(map::get_markers))
}
