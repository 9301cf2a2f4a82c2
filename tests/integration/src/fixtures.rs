//! Test fixtures and data generators
//!
//! Seeds the in-memory store and mirrors the JSON the API returns.

use chrono::{DateTime, Duration, Utc};
use food_core::{Coordinates, FoodPost, PostId, Profile, UserId};
use food_db::{InMemoryFoodPostRepository, InMemoryProfileRepository};
use serde::Deserialize;

/// Builder for a post row
#[derive(Debug, Clone)]
pub struct PostFixture {
    owner: UserId,
    title: String,
    location: String,
    expires_in: Duration,
    created_ago: Duration,
    coordinates: Option<Coordinates>,
    finished_by: Vec<UserId>,
    going_by: Vec<UserId>,
}

impl PostFixture {
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner,
            title: "Leftover catering sandwiches".to_string(),
            location: "Engineering Library".to_string(),
            expires_in: Duration::hours(2),
            created_ago: Duration::zero(),
            coordinates: None,
            finished_by: Vec::new(),
            going_by: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Backdate `created_at`, which drives listing order
    pub fn created_ago(mut self, created_ago: Duration) -> Self {
        self.created_ago = created_ago;
        self
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates::new(lat, lng));
        self
    }

    pub fn finished_by(mut self, users: Vec<UserId>) -> Self {
        self.finished_by = users;
        self
    }

    pub fn going_by(mut self, users: Vec<UserId>) -> Self {
        self.going_by = users;
        self
    }

    /// Store the post and return its id
    pub fn insert(self, posts: &InMemoryFoodPostRepository) -> PostId {
        let mut post = FoodPost::new(
            PostId::generate(),
            self.owner,
            self.title,
            self.location,
            Utc::now() + self.expires_in,
        );
        post.created_at -= self.created_ago;
        post.coordinates = self.coordinates;
        post.finished_by = self.finished_by.into();
        post.going_by = self.going_by.into();

        let id = post.id;
        posts.insert(post);
        id
    }
}

pub fn insert_profile(profiles: &InMemoryProfileRepository, user_id: UserId, first: &str, last: &str) {
    profiles.insert(Profile {
        user_id,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        avatar_url: None,
    });
}

/// `{"data": ...}` list envelope
#[derive(Debug, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewerResponse {
    pub is_owner: bool,
    pub has_finished: bool,
    pub is_going: bool,
}

#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub expires_at: DateTime<Utc>,
    pub finished_by: Vec<UserId>,
    pub going_by: Vec<UserId>,
    pub finished_count: usize,
    pub going_count: usize,
    pub status: String,
    pub time_status: String,
    pub author: Option<AuthorResponse>,
    pub viewer: ViewerResponse,
}

#[derive(Debug, Deserialize)]
pub struct ToggleResponse {
    pub post_id: PostId,
    pub field: String,
    pub participants: Vec<UserId>,
    pub count: usize,
    pub is_marking: bool,
    pub auto_expired: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct MarkerResponse {
    pub post_id: PostId,
    pub lat: f64,
    pub lng: f64,
    pub color: String,
    pub color_hex: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}
