/// Opaque session tokens
///
/// The client holds 32 random bytes (hex). The database only ever sees the
/// SHA-256 digest, so a leaked sessions table cannot be replayed.
use rand::RngCore;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

/// Generate a new random session token
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Digest stored in `sessions.token_hash`
pub fn hash_session_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
