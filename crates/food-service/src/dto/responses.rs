//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use food_core::{MarkerColor, ParticipationField, PostId, PostStatus, UserId};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Post Responses
// ============================================================================

/// Author display fields, from the profile
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
}

/// What the requesting user has done to a post, for button state
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ViewerState {
    pub is_owner: bool,
    pub has_finished: bool,
    pub is_going: bool,
}

/// Food post as listed on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub servings: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub finished_by: Vec<UserId>,
    pub going_by: Vec<UserId>,
    pub finished_count: usize,
    pub going_count: usize,
    pub status: PostStatus,
    /// e.g. "Expires in 2h 5m"
    pub time_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
    pub viewer: ViewerState,
}

/// Result of a participation toggle
#[derive(Debug, Clone, Serialize)]
pub struct ToggleResponse {
    pub post_id: PostId,
    pub field: ParticipationField,
    pub participants: Vec<UserId>,
    pub count: usize,
    pub is_marking: bool,
    pub auto_expired: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Confirmation shown to the user
    pub message: String,
}

// ============================================================================
// Map Responses
// ============================================================================

/// One marker on the campus map
#[derive(Debug, Clone, Serialize)]
pub struct MarkerResponse {
    pub post_id: PostId,
    pub title: String,
    pub location: String,
    /// Position after overlap adjustment
    pub lat: f64,
    pub lng: f64,
    pub color: MarkerColor,
    pub color_hex: &'static str,
    pub finished_count: usize,
    pub going_count: usize,
    pub expires_at: DateTime<Utc>,
    pub time_status: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
    pub backend: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool, backend: &str) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
                backend: backend.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
