//! In-memory implementation of FoodPostRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::instrument;

use food_core::entities::FoodPost;
use food_core::traits::{FoodPostRepository, RepoResult};
use food_core::value_objects::{ParticipantSet, ParticipationField, PostId, UserId};

use super::FaultInjection;

/// A write that reached the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreWrite {
    Participants {
        post_id: PostId,
        field: ParticipationField,
        participants: ParticipantSet,
    },
    ExpiresAt {
        post_id: PostId,
        expires_at: DateTime<Utc>,
    },
    ExpireOwned {
        post_id: PostId,
        owner_id: UserId,
    },
    DeleteOwned {
        post_id: PostId,
        owner_id: UserId,
    },
}

/// In-memory implementation of FoodPostRepository
///
/// Writes are only kept when built with [`Self::with_write_log`].
#[derive(Debug, Default)]
pub struct InMemoryFoodPostRepository {
    posts: Mutex<HashMap<PostId, FoodPost>>,
    writes: Option<Mutex<Vec<StoreWrite>>>,
    faults: FaultInjection,
}

impl InMemoryFoodPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that records every write it accepts, for assertions in tests
    pub fn with_write_log() -> Self {
        Self {
            writes: Some(Mutex::new(Vec::new())),
            ..Self::default()
        }
    }

    /// Add or replace a post
    pub fn insert(&self, post: FoodPost) {
        self.posts.lock().insert(post.id, post);
    }

    /// Current stored copy of a post, bypassing fault injection
    pub fn get(&self, id: PostId) -> Option<FoodPost> {
        self.posts.lock().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.lock().is_empty()
    }

    pub fn faults(&self) -> &FaultInjection {
        &self.faults
    }

    /// Every write recorded so far, oldest first; empty without a write log
    pub fn writes(&self) -> Vec<StoreWrite> {
        self.writes
            .as_ref()
            .map(|log| log.lock().clone())
            .unwrap_or_default()
    }

    fn record(&self, write: StoreWrite) {
        if let Some(log) = &self.writes {
            log.lock().push(write);
        }
    }

    /// Matching posts, newest first, at most `limit`
    fn select<F>(&self, limit: i64, predicate: F) -> Vec<FoodPost>
    where
        F: Fn(&FoodPost) -> bool,
    {
        let mut posts: Vec<FoodPost> = self
            .posts
            .lock()
            .values()
            .filter(|post| predicate(post))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.truncate(usize::try_from(limit).unwrap_or(0));
        posts
    }
}

#[async_trait]
impl FoodPostRepository for InMemoryFoodPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<FoodPost>> {
        self.faults.check_read()?;
        Ok(self.get(id))
    }

    #[instrument(skip(self))]
    async fn find_participants(
        &self,
        id: PostId,
        field: ParticipationField,
    ) -> RepoResult<Option<ParticipantSet>> {
        self.faults.check_read()?;
        Ok(self
            .posts
            .lock()
            .get(&id)
            .map(|post| post.participants(field).clone()))
    }

    #[instrument(skip(self, participants), fields(count = participants.len()))]
    async fn replace_participants(
        &self,
        id: PostId,
        field: ParticipationField,
        participants: &ParticipantSet,
    ) -> RepoResult<u64> {
        self.faults.check_participant_write()?;
        self.record(StoreWrite::Participants {
            post_id: id,
            field,
            participants: participants.clone(),
        });

        let mut posts = self.posts.lock();
        match posts.get_mut(&id) {
            Some(post) => {
                post.set_participants(field, participants.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    #[instrument(skip(self))]
    async fn set_expires_at(&self, id: PostId, expires_at: DateTime<Utc>) -> RepoResult<u64> {
        self.faults.check_expiry_write()?;
        self.record(StoreWrite::ExpiresAt {
            post_id: id,
            expires_at,
        });

        let mut posts = self.posts.lock();
        match posts.get_mut(&id) {
            Some(post) => {
                post.expires_at = expires_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    #[instrument(skip(self))]
    async fn expire_owned(
        &self,
        id: PostId,
        owner_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<u64> {
        self.faults.check_expiry_write()?;
        self.record(StoreWrite::ExpireOwned {
            post_id: id,
            owner_id,
        });

        let mut posts = self.posts.lock();
        match posts.get_mut(&id) {
            Some(post) if post.is_owned_by(owner_id) => {
                post.expires_at = expires_at;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    #[instrument(skip(self))]
    async fn delete_owned(&self, id: PostId, owner_id: UserId) -> RepoResult<u64> {
        self.faults.check_delete()?;
        self.record(StoreWrite::DeleteOwned {
            post_id: id,
            owner_id,
        });

        let mut posts = self.posts.lock();
        if posts.get(&id).is_some_and(|post| post.is_owned_by(owner_id)) {
            posts.remove(&id);
            Ok(1)
        } else {
            Ok(0)
        }
    }

    #[instrument(skip(self))]
    async fn find_active(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<FoodPost>> {
        self.faults.check_read()?;
        Ok(self.select(limit, |post| post.expires_at > now))
    }

    #[instrument(skip(self))]
    async fn find_expired(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<FoodPost>> {
        self.faults.check_read()?;
        Ok(self.select(limit, |post| post.expires_at <= now))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: UserId, limit: i64) -> RepoResult<Vec<FoodPost>> {
        self.faults.check_read()?;
        Ok(self.select(limit, |post| post.is_owned_by(owner_id)))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64) -> RepoResult<Vec<FoodPost>> {
        self.faults.check_read()?;
        Ok(self.select(limit, |_| true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post(owner: UserId, created_offset_secs: i64, expires_in: Duration) -> FoodPost {
        let mut post = FoodPost::new(
            PostId::generate(),
            owner,
            "Sandwiches".to_string(),
            "Humphreys Hall".to_string(),
            Utc::now() + expires_in,
        );
        post.created_at += Duration::seconds(created_offset_secs);
        post
    }

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryFoodPostRepository>();
    }

    #[tokio::test]
    async fn test_replace_only_touches_one_field() {
        let repo = InMemoryFoodPostRepository::with_write_log();
        let mut stored = post(UserId::generate(), 0, Duration::hours(1));
        let going_user = UserId::generate();
        stored.going_by = vec![going_user].into();
        let id = stored.id;
        repo.insert(stored);

        let finished: ParticipantSet = vec![UserId::generate()].into();
        let rows = repo
            .replace_participants(id, ParticipationField::Finished, &finished)
            .await
            .unwrap();

        assert_eq!(rows, 1);
        let stored = repo.get(id).unwrap();
        assert_eq!(stored.finished_by, finished);
        assert!(stored.going_by.contains(going_user));
        assert_eq!(repo.writes().len(), 1);
    }

    #[tokio::test]
    async fn test_default_store_keeps_no_write_log() {
        let repo = InMemoryFoodPostRepository::new();
        let stored = post(UserId::generate(), 0, Duration::hours(1));
        let id = stored.id;
        repo.insert(stored);

        for _ in 0..3 {
            repo.replace_participants(id, ParticipationField::Going, &ParticipantSet::new())
                .await
                .unwrap();
        }
        repo.set_expires_at(id, Utc::now()).await.unwrap();

        assert!(repo.writes().is_empty());
        assert!(!repo.get(id).unwrap().is_active(Utc::now() + Duration::seconds(1)));
    }

    #[tokio::test]
    async fn test_write_to_missing_post_matches_nothing() {
        let repo = InMemoryFoodPostRepository::new();
        let rows = repo.set_expires_at(PostId::generate(), Utc::now()).await.unwrap();
        assert_eq!(rows, 0);
    }

    #[tokio::test]
    async fn test_listing_order_and_split() {
        let repo = InMemoryFoodPostRepository::new();
        let owner = UserId::generate();
        let older = post(owner, -60, Duration::hours(1));
        let newer = post(UserId::generate(), 0, Duration::hours(1));
        let expired = post(owner, -30, -Duration::hours(1));
        let (older_id, newer_id, expired_id) = (older.id, newer.id, expired.id);
        repo.insert(older);
        repo.insert(newer);
        repo.insert(expired);

        let now = Utc::now();
        let active: Vec<PostId> = repo.find_active(now, 50).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(active, vec![newer_id, older_id]);

        let gone = repo.find_expired(now, 50).await.unwrap();
        assert_eq!(gone.len(), 1);
        assert_eq!(gone[0].id, expired_id);

        let mine: Vec<PostId> = repo.find_by_owner(owner, 50).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(mine, vec![expired_id, older_id]);

        assert_eq!(repo.find_all(2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_owned_operations_check_owner() {
        let repo = InMemoryFoodPostRepository::new();
        let owner = UserId::generate();
        let stored = post(owner, 0, Duration::hours(1));
        let id = stored.id;
        repo.insert(stored);

        assert_eq!(repo.delete_owned(id, UserId::generate()).await.unwrap(), 0);
        assert!(repo.get(id).is_some());

        assert_eq!(repo.delete_owned(id, owner).await.unwrap(), 1);
        assert!(repo.get(id).is_none());
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let repo = InMemoryFoodPostRepository::with_write_log();
        repo.faults().fail_reads(true);
        assert!(repo.find_by_id(PostId::generate()).await.is_err());

        repo.faults().fail_participant_writes(true);
        let result = repo
            .replace_participants(PostId::generate(), ParticipationField::Going, &ParticipantSet::new())
            .await;
        assert!(result.is_err());
        assert!(repo.writes().is_empty());
    }
}
