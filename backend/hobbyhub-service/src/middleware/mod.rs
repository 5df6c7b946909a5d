/// HTTP middleware for hobbyhub-service
///
/// `SessionAuth` resolves the caller's session token once per request and
/// stores the resolved account in request extensions. Handlers then pick it
/// up through the `CurrentAccount` / `MaybeAccount` extractors.
use crate::error::HobbyHubError;
use crate::models::Account;
use crate::AppState;
use actix_web::dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "hobbyhub_session";

/// Read the session token from `Authorization: Bearer` or the session cookie.
pub fn session_token(req: &HttpRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    bearer.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|t| !t.is_empty())
    })
}

// =====================================================================
// Session resolution
// =====================================================================

/// Authenticated account stored in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

/// Actix middleware that resolves the session token, if any.
///
/// Anonymous requests pass through untouched; routes that need an account
/// reject them via the `CurrentAccount` extractor. A failed lookup also
/// leaves the caller anonymous.
pub struct SessionAuth;

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthService {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionAuthService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let token = session_token(req.request());
            let state = req.app_data::<web::Data<AppState>>().cloned();

            if let (Some(token), Some(state)) = (token, state) {
                match state.sessions.resolve(&token).await {
                    Ok(Some(account)) => {
                        req.extensions_mut().insert(CurrentAccount(account));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "Session lookup failed; treating caller as anonymous"
                        );
                    }
                }
            }

            service.call(req).await
        })
    }
}

impl FromRequest for CurrentAccount {
    type Error = HobbyHubError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentAccount>()
                .cloned()
                .ok_or(HobbyHubError::Unauthenticated),
        )
    }
}

/// The current account when the route also serves anonymous callers.
#[derive(Debug, Clone)]
pub struct MaybeAccount(pub Option<Account>);

impl FromRequest for MaybeAccount {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(MaybeAccount(
            req.extensions().get::<CurrentAccount>().map(|c| c.0.clone()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    #[test]
    fn test_session_token_from_bearer_header() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc123"))
            .to_http_request();

        assert_eq!(session_token(&req).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_token_from_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "from-cookie"))
            .to_http_request();

        assert_eq!(session_token(&req).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_bearer_header_wins_over_cookie() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer header-token"))
            .cookie(Cookie::new(SESSION_COOKIE, "cookie-token"))
            .to_http_request();

        assert_eq!(session_token(&req).as_deref(), Some("header-token"));
    }

    #[test]
    fn test_no_token_is_anonymous() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();

        assert!(session_token(&req).is_none());
    }

    #[actix_web::test]
    async fn test_current_account_missing_is_unauthenticated() {
        let req = TestRequest::default().to_http_request();
        let result = CurrentAccount::from_request(&req, &mut Payload::None).await;

        assert!(matches!(result, Err(HobbyHubError::Unauthenticated)));
    }
}
