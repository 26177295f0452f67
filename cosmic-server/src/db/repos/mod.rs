//! Repository implementations for database access
//!
//! Each repository borrows the pool and runs one statement per call.
//! Row structs serialize straight into response payloads.

pub mod admin;
pub mod bookings;
pub mod business_info;
pub mod chatbot_config;
pub mod messages;
pub mod slides;
pub mod testimonials;

pub use admin::AdminRepo;
pub use bookings::{Booking, BookingRepo};
pub use business_info::{BusinessInfo, BusinessInfoRepo};
pub use chatbot_config::{ChatbotConfig, ChatbotConfigRepo};
pub use messages::{ContactMessage, MessageRepo};
pub use slides::{GallerySlide, GallerySlideRepo, HeroSlide, HeroSlideRepo};
pub use testimonials::{Testimonial, TestimonialRepo};

use std::fmt;

/// Row cap for the admin booking and inquiry lists
pub const ADMIN_LIST_CAP: i64 = 100;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{}", NotFoundDisplay(.resource, .id))]
    NotFound { resource: &'static str, id: Option<i64> },

    #[error("credential error: {0}")]
    Credential(String),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: Some(id),
        }
    }

    pub fn singleton_missing(resource: &'static str) -> Self {
        Self::NotFound { resource, id: None }
    }
}

struct NotFoundDisplay<'a>(&'a str, &'a Option<i64>);

impl fmt::Display for NotFoundDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            Some(id) => write!(f, "{} {} not found", self.0, id),
            None => write!(f, "{} not found", self.0),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages() {
        assert_eq!(DbError::not_found("hero slide", 7).to_string(), "hero slide 7 not found");
        assert_eq!(
            DbError::singleton_missing("Business info").to_string(),
            "Business info not found"
        );
    }
}
