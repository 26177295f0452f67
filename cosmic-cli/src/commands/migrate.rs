//! Schema creation and seeding without starting the server

use std::path::Path;

use anyhow::Result;

use super::{load_config, prepare_database};

pub async fn run_migrate(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let pool = prepare_database(&config).await?;
    pool.close().await;

    println!("Database ready: {}", config.database.url);
    Ok(())
}
