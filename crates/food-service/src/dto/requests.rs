//! Request DTOs for API endpoints
//!
//! Query strings implement `Deserialize` and `Validate`.

use serde::Deserialize;
use validator::Validate;

/// Page size used when `limit` is omitted
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Largest accepted `limit`
pub const MAX_LIST_LIMIT: i64 = 100;

/// `?limit=` for list endpoints
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListPostsQuery {
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl ListPostsQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

/// `?expired=&limit=` for the map
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MapMarkersQuery {
    /// Show expired posts instead of active ones
    #[serde(default)]
    pub expired: bool,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl MapMarkersQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(MAX_LIST_LIMIT)
    }
}
