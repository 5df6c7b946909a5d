/// Session manager - binds opaque tokens to accounts
use crate::db;
use crate::error::{HobbyHubError, Result};
use crate::models::Account;
use crate::security::{generate_session_token, hash_session_token};
use crate::services::AccountStore;
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Plaintext token; only the digest is stored
    pub token: String,
    pub account: Account,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionManager {
    pool: SqlitePool,
    accounts: AccountStore,
    /// `None` when the configured TTL does not fit a `Duration`
    ttl: Option<Duration>,
}

impl SessionManager {
    pub fn new(pool: SqlitePool, accounts: AccountStore, ttl_secs: i64) -> Self {
        Self {
            pool,
            accounts,
            ttl: Duration::try_seconds(ttl_secs),
        }
    }

    /// Authenticate and open a new session
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let account = self.accounts.authenticate(email, password).await?;

        let expires_at = self
            .ttl
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| HobbyHubError::Internal("session TTL out of range".to_string()))?;

        let token = generate_session_token();
        db::sessions::create_session(&self.pool, &hash_session_token(&token), account.id, expires_at)
            .await?;

        info!(account_id = account.id, "Session opened");

        Ok(LoginOutcome {
            token,
            account,
            expires_at,
        })
    }

    /// Invalidate a session. Unknown or already closed tokens are not an error.
    pub async fn logout(&self, token: &str) -> Result<()> {
        let revoked = db::sessions::revoke_session(&self.pool, &hash_session_token(token)).await?;
        if revoked {
            info!("Session closed");
        } else {
            debug!("Logout for unknown or already closed session");
        }
        Ok(())
    }

    /// Current account for `token`, or `None` when the caller is anonymous
    pub async fn resolve(&self, token: &str) -> Result<Option<Account>> {
        let Some(session) = db::sessions::get_session(&self.pool, &hash_session_token(token)).await?
        else {
            return Ok(None);
        };

        if !session.is_valid() {
            return Ok(None);
        }

        match self.require_account(session.account_id).await {
            Ok(account) => Ok(Some(account)),
            Err(HobbyHubError::NotFound(what)) => {
                warn!(account_id = session.account_id, "Session refers to missing {}", what);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn require_account(&self, account_id: i64) -> Result<Account> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| HobbyHubError::NotFound("account".to_string()))
    }
}
