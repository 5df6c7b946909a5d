/// Authorization gate for the administrative view
use crate::error::{HobbyHubError, Result};
use crate::models::{Account, Post};
use crate::services::{AccountStore, PostStore};
use serde::Serialize;
use tracing::warn;

/// The single authorization predicate
pub fn is_admin(account: &Account) -> bool {
    account.is_admin
}

/// Every account and every post; there is no partial variant
#[derive(Debug, Serialize)]
pub struct AdminView {
    pub accounts: Vec<Account>,
    pub posts: Vec<Post>,
}

#[derive(Clone)]
pub struct AdminGate {
    accounts: AccountStore,
    posts: PostStore,
}

impl AdminGate {
    pub fn new(accounts: AccountStore, posts: PostStore) -> Self {
        Self { accounts, posts }
    }

    /// Full listing for admins, `Forbidden` for everyone else
    pub async fn view(&self, viewer: &Account) -> Result<AdminView> {
        if !is_admin(viewer) {
            warn!(account_id = viewer.id, "Non-admin requested the admin view");
            return Err(HobbyHubError::Forbidden);
        }

        Ok(AdminView {
            accounts: self.accounts.list_all().await?,
            posts: self.posts.list_all_oldest_first().await?,
        })
    }
}
