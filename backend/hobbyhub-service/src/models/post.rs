use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Post model - a titled content item owned by one account
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    /// Stored and displayed, but no operation increments it
    pub likes: i64,
    pub account_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Post joined with its author's display name
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct FeedEntry {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub post: Post,
    pub author_name: String,
}

/// Post creation request (HTTP)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(max = 200))]
    pub title: String,
    pub content: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}
