/// Data models for accounts, posts and sessions
pub mod account;
pub mod post;
pub mod session;

pub use account::{Account, LoginRequest, RegisterRequest};
pub use post::{CreatePostRequest, FeedEntry, Post};
pub use session::Session;
