//! HobbyHub Service
//!
//! A small social-posting service: accounts register and log in, post
//! titled content to a shared feed, and view their own posts. Admin
//! accounts (created only through the `hobbyhub-admin` CLI) can list every
//! account and post.
//!
//! # Modules
//!
//! - `db`: SQLite access functions and embedded migrations
//! - `services`: account store, session manager, post store, admin gate
//! - `middleware`: session resolution and request extractors
//! - `handlers` / `routes`: the JSON HTTP API under `/api/v1`

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod telemetry;

pub use error::{HobbyHubError, Result};

use crate::config::SessionSettings;
use services::{AccountStore, AdminGate, PostStore, SessionManager};
use sqlx::SqlitePool;

/// Shared application state, built once in `main` (or a test) and handed
/// to actix as `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub accounts: AccountStore,
    pub posts: PostStore,
    pub sessions: SessionManager,
    pub admin: AdminGate,
    pub session_settings: SessionSettings,
}

impl AppState {
    pub fn new(pool: SqlitePool, session_settings: SessionSettings) -> Self {
        let accounts = AccountStore::new(pool.clone());
        let posts = PostStore::new(pool.clone());
        let sessions = SessionManager::new(pool.clone(), accounts.clone(), session_settings.ttl_secs);
        let admin = AdminGate::new(accounts.clone(), posts.clone());

        Self {
            pool,
            accounts,
            posts,
            sessions,
            admin,
            session_settings,
        }
    }
}
