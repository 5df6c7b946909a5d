/// Security primitives for hobbyhub-service
///
/// - **password**: Argon2id password hashing
/// - **session_token**: opaque session tokens and their stored digests
pub mod password;
pub mod session_token;

pub use password::{hash_password, verify_password};
pub use session_token::{generate_session_token, hash_session_token};
