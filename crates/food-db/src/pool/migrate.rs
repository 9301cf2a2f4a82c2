//! Schema migrations
//!
//! Migrations are read from disk at runtime so the crate builds without a
//! live database.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use std::path::Path;
use tracing::info;

/// Migrations shipped with this crate
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply pending migrations from [`MIGRATIONS_DIR`]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    run_migrations_from(pool, Path::new(MIGRATIONS_DIR)).await
}

/// Apply pending migrations from `dir`
pub async fn run_migrations_from(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    info!(dir = %dir.display(), migrations = migrator.iter().count(), "Running migrations");
    migrator.run(pool).await
}
