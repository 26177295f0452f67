//! Route handlers organized by resource

pub mod admin;
pub mod bookings;
pub mod business_info;
pub mod chatbot;
pub mod health;
pub mod messages;
pub mod slides;
pub mod testimonials;

use std::str::FromStr;

use cosmic_core::ValidationError;
use serde::Deserialize;

use super::error::ApiError;

/// `{status}` body shared by the booking and inquiry status routes
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<String>,
}

impl StatusUpdate {
    /// Parse the requested status with the target enum's rules.
    pub fn parse<T>(self) -> Result<T, ApiError>
    where
        T: FromStr<Err = ValidationError>,
    {
        let raw = self
            .status
            .filter(|s| !s.trim().is_empty())
            .ok_or(ValidationError::Missing { field: "status" })?;
        Ok(raw.parse()?)
    }
}
