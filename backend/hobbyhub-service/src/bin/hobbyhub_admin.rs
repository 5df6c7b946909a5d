//! `hobbyhub-admin` - bootstrap CLI
//!
//! Creates the database and the admin accounts that the HTTP API has no
//! way to create.

use anyhow::Context;
use clap::{Parser, Subcommand};
use db_pool::DbConfig;
use hobbyhub_service::config::{LogSettings, SERVICE_NAME};
use hobbyhub_service::services::AccountStore;
use hobbyhub_service::{db, telemetry};
use sqlx::SqlitePool;

#[derive(Parser)]
#[command(name = "hobbyhub-admin")]
#[command(about = "HobbyHub bootstrap tooling", long_about = None)]
struct Cli {
    /// Overrides DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database file if missing and apply migrations
    InitDb,
    /// Create an admin account
    CreateAdmin {
        #[arg(long)]
        email: String,
        #[arg(long, env = "HOBBYHUB_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: Option<String>,
    },
}

async fn connect(database_url: Option<String>) -> anyhow::Result<SqlitePool> {
    let mut config = DbConfig::from_env(SERVICE_NAME);
    if let Some(url) = database_url {
        config.database_url = url;
    }
    // One-shot command; no need for the background gauge refresher.
    config.metrics_refresh_secs = None;

    let pool = db_pool::create_pool(config)
        .await
        .context("Failed to open database")?;
    db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if cfg!(debug_assertions) {
        let _ = dotenvy::dotenv();
    }
    telemetry::init_tracing(&LogSettings::from_env());

    let cli = Cli::parse();
    let pool = connect(cli.database_url).await?;

    match cli.command {
        Commands::InitDb => {
            let accounts = db::accounts::count(&pool).await?;
            let posts = db::posts::count(&pool).await?;
            println!("Database ready ({} accounts, {} posts)", accounts, posts);
        }
        Commands::CreateAdmin {
            email,
            password,
            name,
        } => {
            let account = AccountStore::new(pool.clone())
                .create_admin(&email, &password, name.as_deref())
                .await
                .with_context(|| format!("Failed to create admin {}", email))?;
            println!("Created admin account {} (id {})", account.email, account.id);
        }
    }

    pool.close().await;
    Ok(())
}
