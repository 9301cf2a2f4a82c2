//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (Postgres or in-memory).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{FoodPost, Profile};
use crate::error::DomainError;
use crate::value_objects::{ParticipantSet, ParticipationField, PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// FoodPost Repository
// ============================================================================

#[async_trait]
pub trait FoodPostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<FoodPost>>;

    /// Read one participant set. `Ok(None)` when the post does not exist;
    /// a NULL column reads as an empty set.
    async fn find_participants(
        &self,
        id: PostId,
        field: ParticipationField,
    ) -> RepoResult<Option<ParticipantSet>>;

    /// Overwrite one participant set with `participants`.
    ///
    /// Returns the number of rows matched. Only `field` is written.
    async fn replace_participants(
        &self,
        id: PostId,
        field: ParticipationField,
        participants: &ParticipantSet,
    ) -> RepoResult<u64>;

    /// Set `expires_at` unconditionally
    async fn set_expires_at(&self, id: PostId, expires_at: DateTime<Utc>) -> RepoResult<u64>;

    /// Set `expires_at` only if the post is owned by `owner_id`
    async fn expire_owned(
        &self,
        id: PostId,
        owner_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<u64>;

    /// Delete the post only if it is owned by `owner_id`
    async fn delete_owned(&self, id: PostId, owner_id: UserId) -> RepoResult<u64>;

    /// Posts with `expires_at > now`, newest first
    async fn find_active(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<FoodPost>>;

    /// Posts with `expires_at <= now`, newest first
    async fn find_expired(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<FoodPost>>;

    /// Posts shared by `owner_id`, newest first
    async fn find_by_owner(&self, owner_id: UserId, limit: i64) -> RepoResult<Vec<FoodPost>>;

    /// All posts, newest first
    async fn find_all(&self, limit: i64) -> RepoResult<Vec<FoodPost>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by user ID
    async fn find_by_user_id(&self, user_id: UserId) -> RepoResult<Option<Profile>>;

    /// Find profiles for a batch of users; missing users are skipped
    async fn find_by_user_ids(&self, user_ids: &[UserId]) -> RepoResult<Vec<Profile>>;
}
