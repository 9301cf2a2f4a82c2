//! Active/expired classification

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::FoodPost;

/// Visibility state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// `now < expires_at`
    Active,
    /// `now >= expires_at`
    Expired,
}

impl PostStatus {
    #[inline]
    pub fn at(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now < expires_at {
            Self::Active
        } else {
            Self::Expired
        }
    }
}

/// Split posts into `(active, expired)`, keeping their relative order
pub fn partition(posts: Vec<FoodPost>, now: DateTime<Utc>) -> (Vec<FoodPost>, Vec<FoodPost>) {
    posts.into_iter().partition(|post| post.is_active(now))
}

/// Human-readable time until (or since) expiry
pub fn time_status(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = expires_at - now;

    if diff.num_milliseconds() > 0 {
        let hours = diff.num_hours();
        let minutes = diff.num_minutes() % 60;
        if hours > 0 {
            format!("Expires in {hours}h {minutes}m")
        } else {
            format!("Expires in {minutes}m")
        }
    } else {
        let past_hours = (-diff).num_hours();
        if past_hours < 24 {
            format!("Expired {past_hours}h ago")
        } else {
            format!("Expired {}d ago", past_hours / 24)
        }
    }
}
