//! cosmic-core: records, input normalization and configuration
//!
//! Everything here is storage-agnostic. Calling surfaces hand in loosely
//! shaped drafts (chat widget, contact form, admin panel) and get back
//! canonical records that the server persists as-is.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::CosmicConfig;
pub use error::{CoreError, Result};
pub use validation::ValidationError;
