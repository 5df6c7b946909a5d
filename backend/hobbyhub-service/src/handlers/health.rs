/// Health check handlers
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": crate::config::SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe - checks the database answers
pub async fn readiness(state: web::Data<AppState>) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => HttpResponse::Ok().json(json!({ "status": "ready" })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unavailable",
                "reason": "database",
            }))
        }
    }
}
