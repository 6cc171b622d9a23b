//! Connection management.
//!
//! [`DatabasePool`] wraps the sqlx PostgreSQL pool. [`DatabaseHandle`] is
//! what the rest of the application holds: it opens the configured store
//! on first use and hands out the same instance afterwards.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::OnceCell;
use tracing::info;

use jobportal_core::config::{DatabaseConfig, StoreProvider};
use jobportal_core::error::{AppError, ErrorKind};
use jobportal_core::result::AppResult;
use jobportal_core::traits::DocumentStore;

use crate::store::{MemoryStore, PgDocumentStore};

/// Wrapper around the sqlx PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new database pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Lazily opened document store.
///
/// The first call to [`get`](Self::get) opens the configured backend;
/// concurrent first callers wait on the same initialization and every
/// caller receives the same store. A failed open is not cached, so a
/// later call retries.
#[derive(Debug)]
pub struct DatabaseHandle {
    config: DatabaseConfig,
    store: OnceCell<Arc<dyn DocumentStore>>,
}

impl DatabaseHandle {
    /// Create a handle that opens the store described by `config` on first use.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            store: OnceCell::new(),
        }
    }

    /// Create a handle around an already opened store (for testing and tooling).
    pub fn from_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: DatabaseConfig::default(),
            store: OnceCell::new_with(Some(store)),
        }
    }

    /// Return the store, opening it if this is the first call.
    pub async fn get(&self) -> AppResult<Arc<dyn DocumentStore>> {
        self.store
            .get_or_try_init(|| open_store(&self.config))
            .await
            .map(Arc::clone)
    }

    /// Whether the store has been opened.
    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }
}

async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn DocumentStore>> {
    match config.provider {
        StoreProvider::Memory => {
            info!("Initializing in-memory document store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreProvider::Postgres => {
            if config.url.is_empty() {
                return Err(AppError::configuration(
                    "database.url is required for the postgres provider",
                ));
            }
            let pool = DatabasePool::connect(config).await?;
            if config.run_migrations {
                crate::migration::run_migrations(pool.pool()).await?;
            }
            info!("Initializing PostgreSQL document store");
            Ok(Arc::new(PgDocumentStore::new(pool.pool().clone())))
        }
    }
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
