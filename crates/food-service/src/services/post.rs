//! Post service
//!
//! Dashboard listings, the single-post view, and the owner-only actions
//! (mark own post finished, delete own post).

use std::collections::HashMap;

use chrono::Utc;
use tracing::{info, instrument, warn};

use food_core::{Actor, DomainError, FoodPost, PostId, Profile, UserId};

use crate::dto::{PostResponse, PostView};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Posts with `expires_at` in the future, newest first
    #[instrument(skip(self))]
    pub async fn list_active(&self, actor: Actor, limit: i64) -> ServiceResult<Vec<PostResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_active(Utc::now(), limit)
            .await
            .map_err(ServiceError::read_failure)?;
        self.render(posts, actor).await
    }

    /// Posts whose `expires_at` has passed, newest first
    #[instrument(skip(self))]
    pub async fn list_expired(&self, actor: Actor, limit: i64) -> ServiceResult<Vec<PostResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_expired(Utc::now(), limit)
            .await
            .map_err(ServiceError::read_failure)?;
        self.render(posts, actor).await
    }

    /// The actor's own posts, active and expired, newest first
    #[instrument(skip(self))]
    pub async fn list_mine(&self, actor: Actor, limit: i64) -> ServiceResult<Vec<PostResponse>> {
        let owner = actor.require_authenticated()?;
        let posts = self
            .ctx
            .post_repo()
            .find_by_owner(owner, limit)
            .await
            .map_err(ServiceError::read_failure)?;
        self.render(posts, actor).await
    }

    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: PostId, actor: Actor) -> ServiceResult<PostResponse> {
        let post = self.load(post_id).await?;
        let mut rendered = self.render(vec![post], actor).await?;
        rendered
            .pop()
            .ok_or_else(|| ServiceError::internal("rendered post missing"))
    }

    /// Owner action: expire the post now
    #[instrument(skip(self))]
    pub async fn finish_own_post(&self, post_id: PostId, actor: Actor) -> ServiceResult<PostResponse> {
        let owner = actor.require_authenticated()?;
        let mut post = self.load_owned(post_id, owner).await?;

        let now = Utc::now();
        let rows = self
            .ctx
            .post_repo()
            .expire_owned(post_id, owner, now)
            .await
            .map_err(ServiceError::write_failure)?;
        if rows == 0 {
            warn!(post_id = %post_id, "Owner expiry matched no rows");
            return Err(DomainError::PostNotFound(post_id).into());
        }

        info!(post_id = %post_id, owner_id = %owner, "Post marked finished by owner");

        post.expires_at = now;
        let mut rendered = self.render(vec![post], actor).await?;
        rendered
            .pop()
            .ok_or_else(|| ServiceError::internal("rendered post missing"))
    }

    /// Owner action: delete the post
    #[instrument(skip(self))]
    pub async fn delete_own_post(&self, post_id: PostId, actor: Actor) -> ServiceResult<()> {
        let owner = actor.require_authenticated()?;
        self.load_owned(post_id, owner).await?;

        let rows = self
            .ctx
            .post_repo()
            .delete_owned(post_id, owner)
            .await
            .map_err(ServiceError::write_failure)?;
        if rows == 0 {
            warn!(post_id = %post_id, "Owner delete matched no rows");
        }

        info!(post_id = %post_id, owner_id = %owner, "Post deleted by owner");
        Ok(())
    }

    async fn load(&self, post_id: PostId) -> ServiceResult<FoodPost> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await
            .map_err(ServiceError::read_failure)?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    async fn load_owned(&self, post_id: PostId, owner: UserId) -> ServiceResult<FoodPost> {
        let post = self.load(post_id).await?;
        if !post.is_owned_by(owner) {
            return Err(DomainError::NotPostOwner.into());
        }
        Ok(post)
    }

    /// Attach author profiles and viewer state
    async fn render(&self, posts: Vec<FoodPost>, actor: Actor) -> ServiceResult<Vec<PostResponse>> {
        let mut owners: Vec<UserId> = posts.iter().map(|post| post.owner_id).collect();
        owners.sort_unstable();
        owners.dedup();

        let profiles: HashMap<UserId, Profile> = self
            .ctx
            .profile_repo()
            .find_by_user_ids(&owners)
            .await
            .map_err(ServiceError::read_failure)?
            .into_iter()
            .map(|profile| (profile.user_id, profile))
            .collect();

        let now = Utc::now();
        let viewer = actor.user_id();
        Ok(posts
            .iter()
            .map(|post| {
                PostResponse::from(PostView {
                    post,
                    author: profiles.get(&post.owner_id),
                    viewer,
                    now,
                })
            })
            .collect())
    }
}
