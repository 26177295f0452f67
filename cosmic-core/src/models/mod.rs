//! Inbound drafts and their canonical records
//!
//! Drafts mirror what the calling surfaces send: every field optional,
//! some concepts under two names. `normalize` applies defaults and
//! required-field checks and yields the record the store persists.

pub mod booking;
pub mod business;
pub mod chatbot;
pub mod contact;
pub mod slide;
pub mod testimonial;

pub use booking::{
    BookingDraft, BookingStatus, NewBooking, DEFAULT_BOOKING_TIME, DEFAULT_SOURCE, FALLBACK_SERVICE,
};
pub use business::{BusinessInfoUpdate, SocialMedia};
pub use chatbot::{decode_services, encode_services, ChatbotConfigUpdate, ServicesInput, DEFAULT_SERVICES};
pub use contact::{ContactDraft, MessageStatus, NewContactMessage, DEFAULT_SUBJECT};
pub use slide::{GallerySlideDraft, HeroSlideDraft, NewGallerySlide, NewHeroSlide};
pub use testimonial::{NewTestimonial, TestimonialDraft};
