use actix_web::{web, App, HttpServer};
use anyhow::Context;
use hobbyhub_service::config::{Settings, SERVICE_NAME};
use hobbyhub_service::{db, routes, telemetry, AppState};
use tracing_actix_web::TracingLogger;

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// HobbyHub Service
///
/// Serves the JSON API under `/api/v1`, plus `/health`, `/health/ready`
/// and `/metrics`.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&settings.logging);

    tracing::info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    settings.database.log_config();

    let pool = db_pool::create_pool(settings.database.clone())
        .await
        .context("Failed to create database pool")?;

    db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let state = web::Data::new(AppState::new(pool.clone(), settings.session.clone()));

    let bind_address = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .configure(routes::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .workers(settings.server.workers)
    .disable_signals()
    .run();

    let handle = server.handle();
    let server_task = actix_web::rt::spawn(server);

    shutdown_signal().await;
    tracing::info!("Shutdown signal received");
    handle.stop(true).await;

    server_task
        .await
        .context("HTTP server task panicked")?
        .context("HTTP server error")?;

    pool.close().await;
    tracing::info!("{} stopped", SERVICE_NAME);

    Ok(())
}
