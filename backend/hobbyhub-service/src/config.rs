//! Configuration management for HobbyHub Service
//!
//! Loads settings from environment variables, with a `.env` file picked up
//! in debug builds for local development.
//!
//! # Example
//!
//! ```no_run
//! use hobbyhub_service::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     println!("listening on {}:{}", settings.server.host, settings.server.port);
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};
use db_pool::DbConfig;
use std::env;
use tracing::info;

pub const SERVICE_NAME: &str = "hobbyhub-service";

/// Longest accepted session lifetime (10 years)
pub const MAX_SESSION_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DbConfig,
    pub server: ServerSettings,
    pub session: SessionSettings,
    pub logging: LogSettings,
}

impl Settings {
    /// Load settings from environment variables (and `.env` in debug builds)
    pub fn load() -> Result<Self> {
        if cfg!(debug_assertions) && dotenvy::dotenv().is_ok() {
            info!("Loaded .env file for development");
        }

        Ok(Settings {
            database: DbConfig::from_env(SERVICE_NAME),
            server: ServerSettings::from_env()?,
            session: SessionSettings::from_env()?,
            logging: LogSettings::from_env(),
        })
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
            workers: env::var("SERVER_WORKERS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .context("Invalid SERVER_WORKERS")?,
        })
    }
}

/// Session lifetime and cookie policy
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Seconds until an unused session expires (default: 30 days)
    pub ttl_secs: i64,
    /// Mark the session cookie `Secure` (HTTPS only)
    pub cookie_secure: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_secs: 30 * 24 * 60 * 60,
            cookie_secure: false,
        }
    }
}

impl SessionSettings {
    fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let ttl_secs: i64 = match env::var("SESSION_TTL_SECS") {
            Ok(raw) => raw.parse().context("Invalid SESSION_TTL_SECS")?,
            Err(_) => defaults.ttl_secs,
        };
        if ttl_secs <= 0 || ttl_secs > MAX_SESSION_TTL_SECS {
            anyhow::bail!(
                "SESSION_TTL_SECS must be between 1 and {}, got {}",
                MAX_SESSION_TTL_SECS,
                ttl_secs
            );
        }

        Ok(Self {
            ttl_secs,
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .context("Invalid SESSION_COOKIE_SECURE")?,
        })
    }
}

/// Log output settings
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self {
            json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}
