use crate::handlers;
use crate::metrics::serve_metrics;
use crate::middleware::SessionAuth;
use actix_web::web;

/// Mount every HTTP route. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(serve_metrics))
        .route("/health", web::get().to(handlers::health::health))
        .route("/health/ready", web::get().to(handlers::health::readiness))
        .service(
            web::scope("/api/v1")
                .wrap(SessionAuth)
                .route("/auth/register", web::post().to(handlers::auth::register))
                .route("/auth/login", web::post().to(handlers::auth::login))
                .route("/auth/logout", web::post().to(handlers::auth::logout))
                .route("/feed", web::get().to(handlers::posts::feed))
                .route("/posts", web::post().to(handlers::posts::create_post))
                .route("/profile", web::get().to(handlers::posts::profile))
                .route("/admin", web::get().to(handlers::admin::admin_view)),
        );
}
