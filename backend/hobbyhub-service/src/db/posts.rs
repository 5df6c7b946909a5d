/// Post database operations
use crate::error::Result;
use crate::models::{FeedEntry, Post};
use chrono::Utc;
use sqlx::SqlitePool;

const POST_COLUMNS: &str = "id, title, content, image_url, likes, account_id, created_at";

/// Create a new post with zero likes
pub async fn create_post(
    pool: &SqlitePool,
    account_id: i64,
    title: &str,
    content: &str,
    image_url: Option<&str>,
) -> Result<Post> {
    let post = sqlx::query_as::<_, Post>(&format!(
        r#"
        INSERT INTO posts (title, content, image_url, likes, account_id, created_at)
        VALUES (?1, ?2, ?3, 0, ?4, ?5)
        RETURNING {POST_COLUMNS}
        "#
    ))
    .bind(title)
    .bind(content)
    .bind(image_url)
    .bind(account_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// All posts, newest first (descending id)
pub async fn list_newest_first(pool: &SqlitePool) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM posts ORDER BY id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// All posts, oldest first (ascending id)
pub async fn list_oldest_first(pool: &SqlitePool) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM posts ORDER BY id ASC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Posts owned by one account, oldest first
pub async fn list_by_account(pool: &SqlitePool, account_id: i64) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(&format!(
        "SELECT {POST_COLUMNS} FROM posts WHERE account_id = ?1 ORDER BY id ASC"
    ))
    .bind(account_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Feed rows: every post with its author's display name, newest first
pub async fn list_feed(pool: &SqlitePool) -> Result<Vec<FeedEntry>> {
    let entries = sqlx::query_as::<_, FeedEntry>(
        r#"
        SELECT p.id, p.title, p.content, p.image_url, p.likes, p.account_id, p.created_at,
               COALESCE(a.name, a.email) AS author_name
        FROM posts p
        JOIN accounts a ON a.id = p.account_id
        ORDER BY p.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Count posts (used by tests and the admin CLI)
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
