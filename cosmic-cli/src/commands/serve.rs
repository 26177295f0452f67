//! HTTP server command

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cosmic_core::CosmicConfig;
use cosmic_server::{run_server, ServerConfig};

use super::{load_config, prepare_database};

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (overrides config and PORT)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config and DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Serve static site files from this directory
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Command-line flags win over file and environment values.
    fn apply(self, config: &mut CosmicConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(url) = self.database_url {
            config.database.url = url;
        }
        if self.cors_permissive {
            config.server.cors_permissive = true;
        }
        if let Some(dir) = self.static_dir {
            config.server.static_dir = Some(dir);
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(config_path: Option<&Path>, args: ServeArgs) -> Result<()> {
    let mut config = load_config(config_path)?;
    args.apply(&mut config);

    let upload_dir = &config.server.upload_dir;
    std::fs::create_dir_all(upload_dir)
        .with_context(|| format!("Failed to create upload directory {}", upload_dir.display()))?;

    let pool = prepare_database(&config).await?;

    if config.uses_default_admin_password() {
        tracing::warn!("Admin password is the built-in default. Set ADMIN_PASSWORD or [admin].password.");
    }

    tracing::info!(
        "Starting Cosmic Astrology server on {} (database: {})",
        config.server.bind,
        config.database.url
    );

    let server = ServerConfig {
        bind_addr: config.server.bind,
        cors_permissive: config.server.cors_permissive,
        static_dir: config.server.static_dir.clone(),
    };

    run_server(pool, server).await.context("Server error")?;
    Ok(())
}
