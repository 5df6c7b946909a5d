use crate::config::LogSettings;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hobbyhub_service=info,actix_web=info,sqlx=warn,info";

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(settings: &LogSettings) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if settings.json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }
}
