//! Config inspection

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use cosmic_core::config::CONFIG_ENV;
use cosmic_core::CosmicConfig;

use super::load_config;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the resolved config (file, env overrides, defaults) as TOML
    Show,
}

pub fn run_config(config_path: Option<&Path>, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            let path = resolved_path(config_path);
            let state = if path.exists() { "" } else { " (not found, defaults apply)" };
            println!("{}{}", path.display(), state);
            Ok(())
        }
        ConfigCommands::Show => {
            let config = load_config(config_path)?;
            print!("{}", config.to_redacted_toml()?);
            Ok(())
        }
    }
}

/// Same precedence as `CosmicConfig::load`.
fn resolved_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .unwrap_or_else(CosmicConfig::config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolved_path(Some(Path::new("/etc/cosmic.toml")));
        assert_eq!(path, PathBuf::from("/etc/cosmic.toml"));
    }
}
