//! Command implementations for cosmicctl

pub mod admin;
pub mod config;
pub mod migrate;
pub mod serve;

pub use admin::run_admin;
pub use config::run_config;
pub use migrate::run_migrate;
pub use serve::run_serve;

use std::path::Path;

use anyhow::{Context, Result};
use cosmic_core::CosmicConfig;
use cosmic_server::db::{self, migrations, seed, SqlitePool};

/// Load config from the `--config` path, env and defaults.
pub fn load_config(path: Option<&Path>) -> Result<CosmicConfig> {
    let config = CosmicConfig::load(path).context("Failed to load configuration")?;
    tracing::debug!(database = %config.database.url, bind = %config.server.bind, "configuration loaded");
    Ok(config)
}

/// Open the database, creating the file, tables and seed rows as needed.
pub async fn prepare_database(config: &CosmicConfig) -> Result<SqlitePool> {
    let url = &config.database.url;
    db::ensure_sqlite_dir(url)
        .with_context(|| format!("Failed to create database directory for {}", url))?;

    let pool = db::create_pool_with_options(url, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", url))?;

    migrations::run(&pool).await.context("Failed to run migrations")?;
    seed::run(&pool, &config.admin)
        .await
        .context("Failed to seed database")?;

    Ok(pool)
}
