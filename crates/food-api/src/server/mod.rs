//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use food_common::{AppConfig, AppError, JwtService, StoreBackend};
use food_db::{
    create_pool, run_migrations, InMemoryFoodPostRepository, InMemoryProfileRepository,
    PgFoodPostRepository, PgProfileRepository, PoolConfig,
};
use food_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get request ids and tracing but are not rate limited.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    match config.store.backend {
        StoreBackend::Postgres => create_postgres_app_state(config).await,
        StoreBackend::Memory => {
            warn!("Using the in-memory store; posts are lost on restart");
            create_memory_app_state(
                config,
                Arc::new(InMemoryFoodPostRepository::new()),
                Arc::new(InMemoryProfileRepository::new()),
            )
        }
    }
}

async fn create_postgres_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.store.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("migration failed: {e}")))?;
        info!("Migrations applied");
    }

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .post_repo(Arc::new(PgFoodPostRepository::new(pool.clone())))
        .profile_repo(Arc::new(PgProfileRepository::new(pool)))
        .jwt_service(jwt_service(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// AppState over caller-supplied in-memory repositories
///
/// The caller keeps its handles, so it can seed posts and inject faults.
pub fn create_memory_app_state(
    config: AppConfig,
    posts: Arc<InMemoryFoodPostRepository>,
    profiles: Arc<InMemoryProfileRepository>,
) -> Result<AppState, AppError> {
    let service_context: ServiceContext = ServiceContextBuilder::new()
        .post_repo(posts)
        .profile_repo(profiles)
        .jwt_service(jwt_service(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

fn jwt_service(config: &AppConfig) -> Arc<JwtService> {
    Arc::new(JwtService::new(&config.jwt.secret, config.jwt.audience.clone()))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
