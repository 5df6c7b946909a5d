/// Session database operations
use crate::error::Result;
use crate::models::Session;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

const SESSION_COLUMNS: &str = "token_hash, account_id, created_at, expires_at, revoked_at";

/// Create a new session row
pub async fn create_session(
    pool: &SqlitePool,
    token_hash: &str,
    account_id: i64,
    expires_at: DateTime<Utc>,
) -> Result<Session> {
    let session = sqlx::query_as::<_, Session>(&format!(
        r#"
        INSERT INTO sessions (token_hash, account_id, created_at, expires_at)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING {SESSION_COLUMNS}
        "#
    ))
    .bind(token_hash)
    .bind(account_id)
    .bind(Utc::now())
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

/// Get session by token digest (validity is checked by the caller)
pub async fn get_session(pool: &SqlitePool, token_hash: &str) -> Result<Option<Session>> {
    let session = sqlx::query_as::<_, Session>(&format!(
        "SELECT {SESSION_COLUMNS} FROM sessions WHERE token_hash = ?1"
    ))
    .bind(token_hash)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// Revoke a session; returns whether a live row was revoked
pub async fn revoke_session(pool: &SqlitePool, token_hash: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE sessions
        SET revoked_at = ?1
        WHERE token_hash = ?2 AND revoked_at IS NULL
        "#,
    )
    .bind(Utc::now())
    .bind(token_hash)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
