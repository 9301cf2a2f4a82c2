//! Service context - dependency container for services

use std::sync::Arc;

use food_common::auth::JwtService;
use food_core::traits::{FoodPostRepository, ProfileRepository};
use food_db::PgPool;

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    // Present only for the Postgres backend
    pool: Option<PgPool>,

    // Repositories
    post_repo: Arc<dyn FoodPostRepository>,
    profile_repo: Arc<dyn ProfileRepository>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    pub fn new(
        pool: Option<PgPool>,
        post_repo: Arc<dyn FoodPostRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            post_repo,
            profile_repo,
            jwt_service,
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// PostgreSQL pool, if the service runs against Postgres
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Name of the backing store, for readiness reporting
    pub fn store_backend(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    pub fn post_repo(&self) -> &dyn FoodPostRepository {
        self.post_repo.as_ref()
    }

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Whether the backing store answers
    pub async fn store_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => true,
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &self.store_backend())
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    post_repo: Option<Arc<dyn FoodPostRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn FoodPostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
