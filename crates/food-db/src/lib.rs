//! # food-db
//!
//! Data access layer implementing the `food-core` repository traits.
//!
//! ## Overview
//!
//! - Connection pool management and runtime migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - An in-memory store with fault injection, used by tests and the
//!   `STORE_BACKEND=memory` demo mode
//!
//! ## Usage
//!
//! ```rust,ignore
//! use food_db::{create_pool, run_migrations, PgFoodPostRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let posts = PgFoodPostRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{FaultInjection, InMemoryFoodPostRepository, InMemoryProfileRepository, StoreWrite};
pub use pool::{create_pool, run_migrations, run_migrations_from, PgPool, PoolConfig, MIGRATIONS_DIR};
pub use repositories::{PgFoodPostRepository, PgProfileRepository};
