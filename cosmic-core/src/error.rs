/// Structured error types for cosmic-core.
///
/// Library consumers get composable errors; the CLI wraps them with
/// `anyhow` context.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cosmic-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but is not valid TOML for `CosmicConfig`
    #[error("Invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be rendered back to TOML
    #[error("Failed to render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// An override or config value is malformed
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for cosmic-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
