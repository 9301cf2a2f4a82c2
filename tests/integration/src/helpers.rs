//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use food_api::{create_app, create_app_state, create_memory_app_state};
use food_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, JwtService,
    RateLimitConfig, ServerConfig, StoreBackend, StoreConfig,
};
use food_core::UserId;
use food_db::{InMemoryFoodPostRepository, InMemoryProfileRepository};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Signing secret shared by the test server and [`TestServer::token_for`]
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Backing store, when the server runs in memory
    pub posts: Arc<InMemoryFoodPostRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over a fresh in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(memory_config()).await
    }

    /// Start a server against the store `config` selects
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let posts = Arc::new(InMemoryFoodPostRepository::with_write_log());
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.audience.clone());

        let state = match config.store.backend {
            StoreBackend::Memory => {
                create_memory_app_state(config, posts.clone(), profiles.clone())?
            }
            StoreBackend::Postgres => create_app_state(config).await?,
        };
        let app = create_app(state)?;

        // Port 0: the OS picks a free one
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            posts,
            profiles,
            jwt,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Access token for `user_id`, signed like the hosted auth service signs them
    pub fn token_for(&self, user_id: UserId) -> String {
        self.jwt
            .issue_access_token(user_id, 3600)
            .expect("failed to sign test token")
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// POST without a body, as the toggle buttons send it
    pub async fn post(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }

    pub async fn post_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).bearer_auth(token).send().await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).bearer_auth(token).send().await?)
    }
}

/// Configuration for a server over the in-memory store
pub fn memory_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "food-share-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        store: StoreConfig {
            backend: StoreBackend::Memory,
            run_migrations: false,
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
            min_connections: 0,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            audience: food_common::AUTHENTICATED_AUDIENCE.to_string(),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    }
}

/// Configuration for a server against the Postgres in `DATABASE_URL`
pub fn postgres_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = memory_config();
    config.store.backend = StoreBackend::Postgres;
    config.store.run_migrations = true;
    config.database.url = std::env::var("DATABASE_URL")?;
    config.database.max_connections = 5;
    Ok(config)
}

/// Whether a Postgres instance is configured for the tests that need one
pub fn check_postgres_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
