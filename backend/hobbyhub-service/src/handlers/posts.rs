/// Post handlers - feed, post creation and the owner's profile
use crate::error::Result;
use crate::middleware::{CurrentAccount, MaybeAccount};
use crate::models::{Account, CreatePostRequest, FeedEntry, Post};
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer: Option<Account>,
    pub posts: Vec<FeedEntry>,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub post: Post,
    pub notice: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub account: Account,
    pub posts: Vec<Post>,
}

/// Public feed, newest first
pub async fn feed(state: web::Data<AppState>, viewer: MaybeAccount) -> Result<HttpResponse> {
    let posts = state.posts.list_feed().await?;

    Ok(HttpResponse::Ok().json(FeedResponse {
        viewer: viewer.0,
        posts,
    }))
}

/// Create a post owned by the current account
pub async fn create_post(
    state: web::Data<AppState>,
    current: CurrentAccount,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let post = state
        .posts
        .create_post(&current.0, &req.title, &req.content, req.image_url.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(CreatePostResponse {
        post,
        notice: "Post added!",
    }))
}

/// The current account and its posts, oldest first
pub async fn profile(state: web::Data<AppState>, current: CurrentAccount) -> Result<HttpResponse> {
    let posts = state.posts.list_by_owner(&current.0).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        account: current.0,
        posts,
    }))
}
