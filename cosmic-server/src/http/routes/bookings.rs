//! Booking endpoints: public submission and admin review

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use cosmic_core::models::{BookingDraft, BookingStatus};
use serde::Serialize;

use crate::db::repos::{Booking, BookingRepo};
use crate::http::envelope::{created, notice, Created, Envelope, Notice};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, ValidId};
use crate::http::server::AppState;

use super::StatusUpdate;

#[derive(Serialize)]
pub struct Bookings {
    pub bookings: Vec<Booking>,
}

/// POST /api/bookings
async fn create_booking(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<BookingDraft>,
) -> Result<(StatusCode, Json<Envelope<Created>>), ApiError> {
    let booking = draft.normalize()?;
    let id = BookingRepo::new(&state.pool).create(&booking).await?;
    tracing::info!(id, source = %booking.source, "booking received");
    Ok(created(id, Some("Booking created")))
}

/// GET /api/admin/bookings - newest first, capped
async fn list_bookings(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Bookings>>, ApiError> {
    let bookings = BookingRepo::new(&state.pool).list_recent().await?;
    Ok(Envelope::ok(Bookings { bookings }))
}

/// PUT /api/admin/bookings/{id}/status
async fn set_status(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(update): JsonBody<StatusUpdate>,
) -> Result<Json<Envelope<Notice>>, ApiError> {
    let status: BookingStatus = update.parse()?;
    BookingRepo::new(&state.pool).set_status(id, status).await?;
    tracing::info!(id, %status, "booking status changed");
    Ok(notice("Status updated"))
}

/// Booking routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route("/api/admin/bookings", get(list_bookings))
        .route("/api/admin/bookings/{id}/status", put(set_status))
}
