//! Backend entry-point: loads settings, prepares the store and serves HTTP.

mod server;

use std::io;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookshop::outbound::persistence::{DbPool, apply_migrations};
use bookshop::settings::AppSettings;
use server::{ServerConfig, create_server};

async fn run_migrations(database_url: String) -> io::Result<()> {
    let applied = tokio::task::spawn_blocking(move || apply_migrations(&database_url))
        .await
        .map_err(|e| io::Error::other(format!("migration task failed: {e}")))?
        .map_err(|e| io::Error::other(e.to_string()))?;
    info!(applied, "database migrations applied");
    Ok(())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_args(std::env::args_os())?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| io::Error::other(format!("invalid bind address: {e}")))?;
    let mut config = ServerConfig::new(bind_addr);

    if let Some(pool_config) = settings.pool_config() {
        if settings.run_migrations {
            run_migrations(pool_config.database_url().to_owned()).await?;
        }
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| io::Error::other(format!("database pool: {e}")))?;
        config = config.with_db_pool(pool);
    } else if settings.run_migrations {
        warn!("run_migrations is set but no database is configured; skipping");
    }

    create_server(config)?.await
}
