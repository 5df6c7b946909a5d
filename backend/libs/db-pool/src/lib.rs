//! Database connection pool management
//!
//! Provides SQLite pool creation and configuration for HobbyHub services

mod metrics;

pub use metrics::update_pool_metrics;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};

/// Default database location, next to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://hobbyhub.db";

/// Database connection pool configuration
#[derive(Clone)]
pub struct DbConfig {
    /// Service name for metrics labeling
    pub service_name: String,
    /// SQLite connection URL (`sqlite://path.db` or `sqlite::memory:`)
    pub database_url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Timeout for the post-connect verification query
    pub connect_timeout_secs: u64,
    /// Connection acquisition timeout (get connection from pool)
    pub acquire_timeout_secs: u64,
    /// Connection idle timeout; `None` keeps idle connections forever
    pub idle_timeout_secs: Option<u64>,
    /// How long a writer waits on a locked database before failing
    pub busy_timeout_secs: u64,
    /// Interval of the background metrics refresher; `None` disables it
    pub metrics_refresh_secs: Option<u64>,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("service_name", &self.service_name)
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("busy_timeout_secs", &self.busy_timeout_secs)
            .field("metrics_refresh_secs", &self.metrics_refresh_secs)
            .finish()
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            service_name: String::from("unknown"),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 5,
            acquire_timeout_secs: 10,
            idle_timeout_secs: Some(600),
            busy_timeout_secs: 5,
            metrics_refresh_secs: Some(30),
        }
    }
}

impl DbConfig {
    /// Create a new DbConfig from environment variables
    ///
    /// Every variable is optional; missing or unparseable values fall back
    /// to the defaults.
    pub fn from_env(service_name: &str) -> Self {
        let defaults = Self::default();

        Self {
            service_name: service_name.to_string(),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: env_or("DB_MAX_CONNECTIONS", defaults.max_connections),
            min_connections: env_or("DB_MIN_CONNECTIONS", defaults.min_connections),
            connect_timeout_secs: env_or("DB_CONNECT_TIMEOUT_SECS", defaults.connect_timeout_secs),
            acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout_secs),
            idle_timeout_secs: Some(env_or(
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout_secs.unwrap_or(600),
            )),
            busy_timeout_secs: env_or("DB_BUSY_TIMEOUT_SECS", defaults.busy_timeout_secs),
            metrics_refresh_secs: defaults.metrics_refresh_secs,
        }
    }

    /// Single-connection in-memory database.
    ///
    /// An in-memory database lives only as long as a connection to it is
    /// open, so the pool is pinned to exactly one connection that never idles
    /// out or gets recycled.
    pub fn in_memory(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            idle_timeout_secs: None,
            metrics_refresh_secs: None,
            ..Self::default()
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }

    /// Log pool configuration details
    pub fn log_config(&self) {
        info!(
            service = %self.service_name,
            max_connections = self.max_connections,
            min_connections = self.min_connections,
            acquire_timeout_secs = self.acquire_timeout_secs,
            busy_timeout_secs = self.busy_timeout_secs,
            in_memory = self.is_in_memory(),
            "Database pool configuration"
        );
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Create a SQLite connection pool and verify it answers queries
///
/// The database file is created when missing. File databases run in WAL
/// mode so readers do not block the single writer.
pub async fn create_pool(config: DbConfig) -> Result<SqlitePool, sqlx::Error> {
    debug!(
        service = %config.service_name,
        max = config.max_connections,
        min = config.min_connections,
        "Creating database pool"
    );

    let mut connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    if !config.is_in_memory() {
        connect_options = connect_options.journal_mode(SqliteJournalMode::Wal);
    }

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(config.idle_timeout_secs.map(Duration::from_secs));

    if config.is_in_memory() {
        pool_options = pool_options.max_lifetime(None);
    }

    let pool = pool_options.connect_with(connect_options).await?;

    match tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_secs),
        sqlx::query("SELECT 1").execute(&pool),
    )
    .await
    {
        Ok(Ok(_)) => {
            info!(
                service = %config.service_name,
                "Database pool created and verified successfully"
            );

            update_pool_metrics(&pool, &config.service_name);

            if let Some(refresh_secs) = config.metrics_refresh_secs {
                let pool_clone = pool.clone();
                let service = config.service_name.clone();
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(refresh_secs));
                    loop {
                        interval.tick().await;
                        if pool_clone.is_closed() {
                            break;
                        }
                        update_pool_metrics(&pool_clone, &service);
                    }
                });
            }

            Ok(pool)
        }
        Ok(Err(e)) => {
            error!(
                service = %config.service_name,
                error = %e,
                "Database connection verification failed"
            );
            Err(e)
        }
        Err(_) => {
            error!(
                service = %config.service_name,
                timeout_secs = config.connect_timeout_secs,
                "Database connection verification timeout"
            );
            Err(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "Database verification timeout",
            )))
        }
    }
}
