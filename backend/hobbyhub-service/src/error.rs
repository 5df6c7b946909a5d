/// Error types for HobbyHub Service
///
/// Every failure is recovered at the HTTP boundary and rendered as a JSON
/// notice; none of them is fatal to the process.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for hobbyhub-service operations
pub type Result<T> = std::result::Result<T, HobbyHubError>;

#[derive(Debug, Error)]
pub enum HobbyHubError {
    #[error("User already exists")]
    DuplicateAccount,

    /// Deliberately identical for unknown email and wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("403 - Access Denied")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Please log in to access this page")]
    Unauthenticated,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl HobbyHubError {
    /// Message safe to show to the end user
    pub fn notice(&self) -> String {
        match self {
            HobbyHubError::Database(_) | HobbyHubError::Internal(_) => {
                // Don't leak internal details
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for HobbyHubError {
    fn status_code(&self) -> StatusCode {
        match self {
            HobbyHubError::DuplicateAccount => StatusCode::CONFLICT,
            HobbyHubError::InvalidCredentials | HobbyHubError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            HobbyHubError::Validation(_) => StatusCode::BAD_REQUEST,
            HobbyHubError::Forbidden => StatusCode::FORBIDDEN,
            HobbyHubError::NotFound(_) => StatusCode::NOT_FOUND,
            HobbyHubError::Database(_) | HobbyHubError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.notice(),
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for HobbyHubError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        HobbyHubError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for HobbyHubError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        tracing::error!("Migration error: {}", err);
        HobbyHubError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for HobbyHubError {
    fn from(err: validator::ValidationErrors) -> Self {
        HobbyHubError::Validation(err.to_string())
    }
}
