//! PostgreSQL implementation of FoodPostRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use food_core::entities::FoodPost;
use food_core::traits::{FoodPostRepository, RepoResult};
use food_core::value_objects::{ParticipantSet, ParticipationField, PostId, UserId};

use crate::mappers::{participants_from_column, participants_to_column};
use crate::models::FoodPostModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FoodPostRepository
#[derive(Clone)]
pub struct PgFoodPostRepository {
    pool: PgPool,
}

impl PgFoodPostRepository {
    /// Create a new PgFoodPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_posts(&self, sql: &str, bind: Option<PostBind>, limit: i64) -> RepoResult<Vec<FoodPost>> {
        let query = sqlx::query_as::<_, FoodPostModel>(sql);
        let query = match bind {
            Some(PostBind::Time(at)) => query.bind(at),
            Some(PostBind::Owner(owner)) => query.bind(owner),
            None => query,
        };

        let results = query
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(FoodPost::from).collect())
    }
}

/// First bind parameter of a listing query; `limit` always follows it
enum PostBind {
    Time(DateTime<Utc>),
    Owner(Uuid),
}

#[async_trait]
impl FoodPostRepository for PgFoodPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<FoodPost>> {
        let sql = format!("SELECT {} FROM food_posts WHERE id = $1", FoodPostModel::COLUMNS);
        let result = sqlx::query_as::<_, FoodPostModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(FoodPost::from))
    }

    #[instrument(skip(self))]
    async fn find_participants(
        &self,
        id: PostId,
        field: ParticipationField,
    ) -> RepoResult<Option<ParticipantSet>> {
        // column names come from a closed enum, never from input
        let sql = format!("SELECT {} FROM food_posts WHERE id = $1", field.column());
        let result = sqlx::query_scalar::<_, Option<Vec<Uuid>>>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(participants_from_column))
    }

    #[instrument(skip(self, participants), fields(count = participants.len()))]
    async fn replace_participants(
        &self,
        id: PostId,
        field: ParticipationField,
        participants: &ParticipantSet,
    ) -> RepoResult<u64> {
        let sql = format!("UPDATE food_posts SET {} = $2 WHERE id = $1", field.column());
        let result = sqlx::query(&sql)
            .bind(id.into_inner())
            .bind(participants_to_column(participants))
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn set_expires_at(&self, id: PostId, expires_at: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE food_posts
            SET expires_at = $2
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn expire_owned(
        &self,
        id: PostId,
        owner_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE food_posts
            SET expires_at = $3
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_owned(&self, id: PostId, owner_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM food_posts
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn find_active(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<FoodPost>> {
        let sql = format!(
            "SELECT {} FROM food_posts WHERE expires_at > $1 ORDER BY created_at DESC LIMIT $2",
            FoodPostModel::COLUMNS
        );
        self.fetch_posts(&sql, Some(PostBind::Time(now)), limit).await
    }

    #[instrument(skip(self))]
    async fn find_expired(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<FoodPost>> {
        let sql = format!(
            "SELECT {} FROM food_posts WHERE expires_at <= $1 ORDER BY created_at DESC LIMIT $2",
            FoodPostModel::COLUMNS
        );
        self.fetch_posts(&sql, Some(PostBind::Time(now)), limit).await
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: UserId, limit: i64) -> RepoResult<Vec<FoodPost>> {
        let sql = format!(
            "SELECT {} FROM food_posts WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
            FoodPostModel::COLUMNS
        );
        self.fetch_posts(&sql, Some(PostBind::Owner(owner_id.into_inner())), limit)
            .await
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64) -> RepoResult<Vec<FoodPost>> {
        let sql = format!(
            "SELECT {} FROM food_posts ORDER BY created_at DESC LIMIT $1",
            FoodPostModel::COLUMNS
        );
        self.fetch_posts(&sql, None, limit).await
    }
}
