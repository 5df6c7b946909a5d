/// Business logic layer for hobbyhub-service
///
/// - Account store: registration, credential checks, bootstrap admins
/// - Session manager: login, logout, token resolution
/// - Post store: post creation and listings
/// - Admin gate: the single authorization predicate and the admin view
pub mod accounts;
pub mod admin;
pub mod posts;
pub mod sessions;

pub use accounts::AccountStore;
pub use admin::{is_admin, AdminGate, AdminView};
pub use posts::PostStore;
pub use sessions::{LoginOutcome, SessionManager};
