use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Account model - a registered identity
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Name shown next to posts; falls back to the email when no name was given
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Lower-case an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registration request (HTTP)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150))]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub name: Option<String>,
}

/// Login request (HTTP)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 150))]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}
