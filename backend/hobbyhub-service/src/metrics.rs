//! Prometheus metrics for hobbyhub-service.
//!
//! Exposes account/post collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Registration attempts by outcome (created, duplicate, invalid, error).
    pub static ref REGISTRATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "hobbyhub_registrations_total",
        "Account registration attempts segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register hobbyhub_registrations_total");

    /// Login attempts by outcome (success, invalid_credentials, error).
    pub static ref LOGINS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "hobbyhub_logins_total",
        "Login attempts segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register hobbyhub_logins_total");

    /// Post creation attempts by outcome (created, invalid, error).
    pub static ref POSTS_CREATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "hobbyhub_posts_created_total",
        "Post creation attempts segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register hobbyhub_posts_created_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
