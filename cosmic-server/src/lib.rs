//! cosmic-server: HTTP back office for the Cosmic Astrology site
//!
//! Public pages read slides, business details and the chat widget
//! configuration and submit bookings and inquiries. The admin panel sits
//! behind a password-gated session and curates everything else.

pub mod auth;
pub mod db;
pub mod http;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
