//! Standalone migration runner: applies pending migrations and exits.
//! The server also migrates at startup; this binary covers deploy pipelines
//! that migrate before rolling instances.

use sso::config::Config;
use sso::db;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    tracing::info!("migrations applied");
    Ok(())
}
