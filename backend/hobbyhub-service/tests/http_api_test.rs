mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use hobbyhub_service::middleware::SESSION_COOKIE;
use hobbyhub_service::routes;
use serde_json::{json, Value};

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(routes::configure),
        )
        .await
    };
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_register_login_post_flow() {
    let state = common::test_state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({"email": "Ada@Example.com", "password": "pw", "name": "Ada"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notice"], "Registered! Please log in.");
    assert_eq!(body["account"]["email"], "ada@example.com");
    assert!(body["account"].get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .response()
        .cookies()
        .any(|c| c.name() == SESSION_COOKIE));
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["notice"], "Logged in successfully!");

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "Chess", "content": "e4 e5"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notice"], "Post added!");
    assert_eq!(body["post"]["likes"], 0);

    let req = test::TestRequest::get().uri("/api/v1/feed").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.get("viewer").is_none());
    assert_eq!(body["posts"][0]["title"], "Chess");
    assert_eq!(body["posts"][0]["author_name"], "Ada");

    let req = test::TestRequest::get()
        .uri("/api/v1/profile")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["account"]["name"], "Ada");
    assert_eq!(body["posts"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_duplicate_registration_is_conflict() {
    let state = common::test_state().await;
    common::register(&state, "ada@example.com", None).await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({"email": "ada@example.com", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User already exists");
    assert_eq!(body["status"], 409);
}

#[actix_web::test]
async fn test_bad_login_is_unauthorized() {
    let state = common::test_state().await;
    common::register(&state, "ada@example.com", None).await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email or password");
}

#[actix_web::test]
async fn test_protected_routes_require_session() {
    let state = common::test_state().await;
    let app = app!(state);

    for uri in ["/api/v1/profile", "/api/v1/admin"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .set_json(json!({"title": "t", "content": "c"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_empty_post_is_bad_request() {
    let state = common::test_state().await;
    common::register(&state, "ada@example.com", None).await;
    let token = state
        .sessions
        .login("ada@example.com", "correct horse")
        .await
        .unwrap()
        .token;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "", "content": "body"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(state.posts.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_logout_then_post_is_rejected() {
    let state = common::test_state().await;
    common::register(&state, "ada@example.com", None).await;
    let token = state
        .sessions
        .login("ada@example.com", "correct horse")
        .await
        .unwrap()
        .token;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notice"], "You have been logged out");

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(bearer(&token))
        .set_json(json!({"title": "Late", "content": "too late"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Anonymous logout is still fine
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_session_cookie_is_accepted() {
    let state = common::test_state().await;
    common::register(&state, "ada@example.com", Some("Ada")).await;
    let token = state
        .sessions
        .login("ada@example.com", "correct horse")
        .await
        .unwrap()
        .token;
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/feed")
        .cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE, token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["viewer"]["email"], "ada@example.com");
    assert!(body["viewer"].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_admin_route_forbidden_for_regular_accounts() {
    let state = common::test_state().await;
    common::register(&state, "ada@example.com", None).await;
    common::admin(&state, "root@example.com").await;
    let user_token = state
        .sessions
        .login("ada@example.com", "correct horse")
        .await
        .unwrap()
        .token;
    let admin_token = state
        .sessions
        .login("root@example.com", "admin-pass")
        .await
        .unwrap()
        .token;
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/admin")
        .insert_header(bearer(&user_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "403 - Access Denied");

    let req = test::TestRequest::get()
        .uri("/api/v1/admin")
        .insert_header(bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["accounts"].as_array().unwrap().len(), 2);
    assert!(body["posts"].as_array().unwrap().is_empty());
    assert!(body["accounts"][0].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_health_and_metrics() {
    let state = common::test_state().await;
    let app = app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/health/ready").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/metrics").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_session_lookup_failure_leaves_caller_anonymous() {
    let state = common::test_state().await;
    common::register(&state, "ada@example.com", None).await;
    let token = state
        .sessions
        .login("ada@example.com", "correct horse")
        .await
        .unwrap()
        .token;
    let app = app!(state);

    state.pool.close().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["notice"], "You have been logged out");

    let req = test::TestRequest::get()
        .uri("/api/v1/profile")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
