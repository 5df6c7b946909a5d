#![allow(dead_code)]

use db_pool::DbConfig;
use hobbyhub_service::config::SessionSettings;
use hobbyhub_service::models::Account;
use hobbyhub_service::{db, AppState};
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied
pub async fn test_pool() -> SqlitePool {
    let pool = db_pool::create_pool(DbConfig::in_memory("hobbyhub-test"))
        .await
        .expect("in-memory pool");
    db::run_migrations(&pool).await.expect("migrations");
    pool
}

pub async fn test_state() -> AppState {
    AppState::new(test_pool().await, SessionSettings::default())
}

pub async fn register(state: &AppState, email: &str, name: Option<&str>) -> Account {
    state
        .accounts
        .register(email, "correct horse", name)
        .await
        .expect("register")
}

pub async fn admin(state: &AppState, email: &str) -> Account {
    state
        .accounts
        .create_admin(email, "admin-pass", Some("Admin"))
        .await
        .expect("create admin")
}
