//! Testimonial endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use cosmic_core::models::TestimonialDraft;
use serde::{Deserialize, Serialize};

use crate::db::repos::{Testimonial, TestimonialRepo};
use crate::http::envelope::{created, notice, Created, Envelope, Notice};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, ValidId};
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct Testimonials {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionUpdate {
    pub is_selected: bool,
    #[serde(default)]
    pub display_order: i64,
}

/// GET /api/testimonials - selected reviews for the public site
async fn list_selected(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Testimonials>>, ApiError> {
    let testimonials = TestimonialRepo::new(&state.pool).list_selected().await?;
    Ok(Envelope::ok(Testimonials { testimonials }))
}

/// GET /api/admin/testimonials - every review, newest first
async fn list_all(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Testimonials>>, ApiError> {
    let testimonials = TestimonialRepo::new(&state.pool).list_all().await?;
    Ok(Envelope::ok(Testimonials { testimonials }))
}

async fn create_testimonial(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<TestimonialDraft>,
) -> Result<(StatusCode, Json<Envelope<Created>>), ApiError> {
    let testimonial = draft.normalize()?;
    let id = TestimonialRepo::new(&state.pool).create(&testimonial).await?;
    Ok(created(id, None))
}

/// PUT /api/admin/testimonials/{id} - show or hide on the public site
async fn set_selection(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(update): JsonBody<SelectionUpdate>,
) -> Result<Json<Envelope<Notice>>, ApiError> {
    TestimonialRepo::new(&state.pool)
        .set_selection(id, update.is_selected, update.display_order)
        .await?;
    Ok(notice("Testimonial updated"))
}

/// Testimonial routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/testimonials", get(list_selected))
        .route(
            "/api/admin/testimonials",
            get(list_all).post(create_testimonial),
        )
        .route("/api/admin/testimonials/{id}", put(set_selection))
}
