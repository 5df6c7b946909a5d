/// Post store - handles post creation and listings
use crate::db;
use crate::error::{HobbyHubError, Result};
use crate::metrics::POSTS_CREATED_TOTAL;
use crate::models::{Account, FeedEntry, Post};
use sqlx::SqlitePool;
use tracing::info;

#[derive(Clone)]
pub struct PostStore {
    pool: SqlitePool,
}

impl PostStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a post owned by `owner`
    ///
    /// The caller is responsible for `owner` being the authenticated account.
    pub async fn create_post(
        &self,
        owner: &Account,
        title: &str,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<Post> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            POSTS_CREATED_TOTAL.with_label_values(&["invalid"]).inc();
            return Err(HobbyHubError::Validation("title is required".to_string()));
        }
        if content.is_empty() {
            POSTS_CREATED_TOTAL.with_label_values(&["invalid"]).inc();
            return Err(HobbyHubError::Validation("content is required".to_string()));
        }
        let image_url = image_url.map(str::trim).filter(|url| !url.is_empty());

        let post = match db::posts::create_post(&self.pool, owner.id, title, content, image_url)
            .await
        {
            Ok(post) => post,
            Err(e) => {
                POSTS_CREATED_TOTAL.with_label_values(&["error"]).inc();
                return Err(e);
            }
        };

        POSTS_CREATED_TOTAL.with_label_values(&["created"]).inc();
        info!(post_id = post.id, account_id = owner.id, "Post created");

        Ok(post)
    }

    /// Every post, newest first
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        db::posts::list_newest_first(&self.pool).await
    }

    /// Every post, oldest first (admin listing)
    pub async fn list_all_oldest_first(&self) -> Result<Vec<Post>> {
        db::posts::list_oldest_first(&self.pool).await
    }

    /// Posts owned by `owner`, oldest first.
    ///
    /// Intentionally the reverse of `list_all`.
    pub async fn list_by_owner(&self, owner: &Account) -> Result<Vec<Post>> {
        db::posts::list_by_account(&self.pool, owner.id).await
    }

    /// Public feed: `list_all` order, with each author's display name
    pub async fn list_feed(&self) -> Result<Vec<FeedEntry>> {
        db::posts::list_feed(&self.pool).await
    }
}
