/// Account store - registration, authentication and lookup
use crate::db;
use crate::error::{HobbyHubError, Result};
use crate::metrics::{LOGINS_TOTAL, REGISTRATIONS_TOTAL};
use crate::models::account::{normalize_email, Account};
use crate::security::password;
use sqlx::SqlitePool;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a regular (non-admin) account
    pub async fn register(&self, email: &str, password: &str, name: Option<&str>) -> Result<Account> {
        let result = self.create(email, password, name, false).await;

        let outcome = match &result {
            Ok(_) => "created",
            Err(HobbyHubError::DuplicateAccount) => "duplicate",
            Err(HobbyHubError::Validation(_)) => "invalid",
            Err(_) => "error",
        };
        REGISTRATIONS_TOTAL.with_label_values(&[outcome]).inc();

        result
    }

    /// Create an admin account. Only reachable from the bootstrap CLI.
    pub async fn create_admin(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<Account> {
        let account = self.create(email, password, name, true).await?;
        info!(account_id = account.id, "Admin account created");
        Ok(account)
    }

    async fn create(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
        is_admin: bool,
    ) -> Result<Account> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(HobbyHubError::Validation("email is required".to_string()));
        }
        if password.is_empty() {
            return Err(HobbyHubError::Validation("password is required".to_string()));
        }
        let name = name.map(str::trim).filter(|n| !n.is_empty());

        if db::accounts::find_by_email(&self.pool, &email).await?.is_some() {
            return Err(HobbyHubError::DuplicateAccount);
        }

        let password_hash = password::hash_password(password)?;

        // A concurrent registration can still win between the check and the
        // insert; the unique constraint reports it as DuplicateAccount.
        let account =
            db::accounts::create_account(&self.pool, &email, &password_hash, name, is_admin)
                .await?;

        info!(account_id = account.id, is_admin, "Account registered");
        Ok(account)
    }

    /// Verify credentials
    ///
    /// Unknown email, wrong password and an unreadable stored hash all
    /// yield the same `InvalidCredentials`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        let email = normalize_email(email);

        let found = match db::accounts::find_by_email(&self.pool, &email).await {
            Ok(found) => found,
            Err(e) => {
                LOGINS_TOTAL.with_label_values(&["error"]).inc();
                return Err(e);
            }
        };

        let Some(account) = found else {
            password::verify_dummy(password);
            LOGINS_TOTAL.with_label_values(&["invalid_credentials"]).inc();
            return Err(HobbyHubError::InvalidCredentials);
        };

        match password::verify_password(password, &account.password_hash) {
            Ok(true) => {
                LOGINS_TOTAL.with_label_values(&["success"]).inc();
                Ok(account)
            }
            Ok(false) => {
                LOGINS_TOTAL.with_label_values(&["invalid_credentials"]).inc();
                Err(HobbyHubError::InvalidCredentials)
            }
            Err(e) => {
                warn!(account_id = account.id, error = %e, "Stored password hash is unusable");
                LOGINS_TOTAL.with_label_values(&["invalid_credentials"]).inc();
                Err(HobbyHubError::InvalidCredentials)
            }
        }
    }

    /// Lookup for session resolution
    pub async fn find_by_id(&self, account_id: i64) -> Result<Option<Account>> {
        db::accounts::find_by_id(&self.pool, account_id).await
    }

    /// Every account, oldest first
    pub async fn list_all(&self) -> Result<Vec<Account>> {
        db::accounts::list_all(&self.pool).await
    }
}
