/// Authentication handlers - register, login, logout
use crate::error::Result;
use crate::middleware::{session_token, SESSION_COOKIE};
use crate::models::{Account, LoginRequest, RegisterRequest};
use crate::AppState;
use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub account: Account,
    pub notice: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: Account,
    pub notice: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NoticeResponse {
    pub notice: &'static str,
}

/// Register a new account
pub async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let account = state
        .accounts
        .register(&req.email, &req.password, req.name.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        account,
        notice: "Registered! Please log in.",
    }))
}

/// Log in and open a session
pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let outcome = state.sessions.login(&req.email, &req.password).await?;

    let cookie = Cookie::build(SESSION_COOKIE, outcome.token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.session_settings.cookie_secure)
        .max_age(time::Duration::seconds(state.session_settings.ttl_secs))
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        token: outcome.token,
        account: outcome.account,
        notice: "Logged in successfully!",
    }))
}

/// Close the caller's session, if any. Always succeeds.
pub async fn logout(state: web::Data<AppState>, http_req: HttpRequest) -> Result<HttpResponse> {
    if let Some(token) = session_token(&http_req) {
        if let Err(e) = state.sessions.logout(&token).await {
            tracing::warn!(error = %e, "Failed to revoke session on logout");
        }
    }

    let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    removal.make_removal();

    Ok(HttpResponse::Ok().cookie(removal).json(NoticeResponse {
        notice: "You have been logged out",
    }))
}
