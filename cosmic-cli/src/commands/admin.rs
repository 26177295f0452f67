//! Admin account maintenance

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cosmic_server::db::AdminRepo;

use super::{load_config, prepare_database};

#[derive(Parser, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommands,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Replace the admin password with a freshly salted hash
    SetPassword {
        /// New password
        password: String,
    },
}

pub async fn run_admin(config_path: Option<&Path>, args: AdminArgs) -> Result<()> {
    match args.command {
        AdminCommands::SetPassword { password } => set_password(config_path, &password).await,
    }
}

async fn set_password(config_path: Option<&Path>, password: &str) -> Result<()> {
    if password.is_empty() {
        bail!("Password must not be empty");
    }

    let config = load_config(config_path)?;
    let pool = prepare_database(&config).await?;

    AdminRepo::new(&pool)
        .set_credentials(&config.admin.username, password)
        .await
        .context("Failed to store admin password")?;
    pool.close().await;

    tracing::info!(username = %config.admin.username, "admin password updated");
    println!("Admin password updated for '{}'", config.admin.username);
    Ok(())
}
