//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::{Duration, Utc};
use food_common::auth::JwtService;
use food_core::{FoodPost, PostId, Profile, UserId};
use food_db::{InMemoryFoodPostRepository, InMemoryProfileRepository};

use super::context::ServiceContext;

pub struct TestContext {
    pub ctx: ServiceContext,
    pub posts: Arc<InMemoryFoodPostRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let posts = Arc::new(InMemoryFoodPostRepository::with_write_log());
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let ctx = ServiceContext::builder()
            .post_repo(posts.clone())
            .profile_repo(profiles.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", "authenticated")))
            .build()
            .unwrap();

        Self {
            ctx,
            posts,
            profiles,
        }
    }
}

/// Store a post owned by `owner` with `finished_by` preset
pub fn seed_post(
    posts: &InMemoryFoodPostRepository,
    owner: UserId,
    finished_by: Vec<UserId>,
    expires_in: Duration,
) -> PostId {
    let mut post = FoodPost::new(
        PostId::generate(),
        owner,
        "Pizza Party Leftovers".to_string(),
        "Benedict Hall".to_string(),
        Utc::now() + expires_in,
    );
    post.finished_by = finished_by.into();
    let id = post.id;
    posts.insert(post);
    id
}

pub fn seed_profile(profiles: &InMemoryProfileRepository, user_id: UserId, first: &str, last: &str) {
    profiles.insert(Profile {
        user_id,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        avatar_url: None,
    });
}
