/// Database operations for hobbyhub-service
pub mod accounts;
pub mod posts;
pub mod sessions;

use crate::error::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Apply embedded schema migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed");
    Ok(())
}

/// True when the error is a UNIQUE/PRIMARY KEY constraint violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
