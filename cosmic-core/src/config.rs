//! Layered configuration: defaults, then TOML file, then environment.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Password seeded for the admin account when nothing else is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@12";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "COSMIC_CONFIG";

/// Centralized configuration for the back office
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmicConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub admin: AdminSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address to bind to
    pub bind: SocketAddr,
    /// Allow any origin instead of localhost only
    pub cors_permissive: bool,
    /// Marketing pages and uploaded assets, served as a fallback
    pub static_dir: Option<PathBuf>,
    /// Where uploaded images land; created at startup
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSection {
    pub username: String,
    pub password: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            cors_permissive: false,
            static_dir: None,
            upload_dir: PathBuf::from("assets/images"),
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://astrology.db".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for AdminSection {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl CosmicConfig {
    /// Load config and apply environment overrides.
    ///
    /// Resolution order for the file: `explicit`, then `$COSMIC_CONFIG`,
    /// then `~/.cosmic/config.toml`. An explicitly named file must exist;
    /// the implicit locations fall back to defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut config = match named {
            Some(path) => Self::from_file(&path)?,
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a config file without applying overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config file path: ~/.cosmic/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cosmic/config.toml")
    }

    /// Apply `DATABASE_URL`, `PORT`, `ADMIN_USER` and `ADMIN_PASSWORD`.
    ///
    /// `PORT` binds `0.0.0.0` on that port; without it the configured
    /// address (localhost by default) is kept.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            self.database.url = url;
        }

        if let Some(port) = lookup("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| CoreError::config(format!("PORT must be a port number, got '{}'", port)))?;
            // Platform-assigned ports expect a listener on every interface.
            self.server.bind = SocketAddr::from(([0, 0, 0, 0], port));
        }

        if let Some(username) = lookup("ADMIN_USER").filter(|v| !v.trim().is_empty()) {
            self.admin.username = username;
        }

        if let Some(password) = lookup("ADMIN_PASSWORD").filter(|v| !v.is_empty()) {
            self.admin.password = password;
        }

        Ok(())
    }

    pub fn uses_default_admin_password(&self) -> bool {
        self.admin.password == DEFAULT_ADMIN_PASSWORD
    }

    /// Render as TOML with the admin password masked.
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut shown = self.clone();
        shown.admin.password = "********".to_string();
        Ok(toml::to_string_pretty(&shown)?)
    }
}
