/// Account database operations
use crate::error::{HobbyHubError, Result};
use crate::models::Account;
use chrono::Utc;
use sqlx::SqlitePool;

const ACCOUNT_COLUMNS: &str = "id, email, password_hash, name, is_admin, created_at";

/// Find account by (already normalized) email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = ?1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Find account by ID
pub async fn find_by_id(pool: &SqlitePool, account_id: i64) -> Result<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = ?1"
    ))
    .bind(account_id)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// List every account, oldest first
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Account>> {
    let accounts = sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY id ASC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(accounts)
}

/// Insert a new account
///
/// The UNIQUE constraint on `email` is the serialization point for
/// concurrent registrations; a violation maps to `DuplicateAccount`.
pub async fn create_account(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    name: Option<&str>,
    is_admin: bool,
) -> Result<Account> {
    let result = sqlx::query_as::<_, Account>(&format!(
        r#"
        INSERT INTO accounts (email, password_hash, name, is_admin, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING {ACCOUNT_COLUMNS}
        "#
    ))
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(is_admin)
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    match result {
        Ok(account) => Ok(account),
        Err(err) if super::is_unique_violation(&err) => Err(HobbyHubError::DuplicateAccount),
        Err(err) => Err(err.into()),
    }
}

/// Count accounts
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
