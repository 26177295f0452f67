//! Hero and gallery carousel endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use cosmic_core::models::{GallerySlideDraft, HeroSlideDraft};
use serde::Serialize;

use crate::db::repos::{GallerySlide, GallerySlideRepo, HeroSlide, HeroSlideRepo};
use crate::http::envelope::{created, notice, Created, Envelope, Notice};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, ValidId};
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct Slides<T> {
    pub slides: Vec<T>,
}

type SlidesResponse<T> = Result<Json<Envelope<Slides<T>>>, ApiError>;
type CreatedResponse = Result<(StatusCode, Json<Envelope<Created>>), ApiError>;
type NoticeResponse = Result<Json<Envelope<Notice>>, ApiError>;

/// GET /api/hero-slides - active slides for the homepage
async fn list_hero(State(state): State<Arc<AppState>>) -> SlidesResponse<HeroSlide> {
    let slides = HeroSlideRepo::new(&state.pool).list_active().await?;
    Ok(Envelope::ok(Slides { slides }))
}

/// GET /api/admin/hero-slides - every slide including inactive ones
async fn list_hero_admin(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> SlidesResponse<HeroSlide> {
    let slides = HeroSlideRepo::new(&state.pool).list_all().await?;
    Ok(Envelope::ok(Slides { slides }))
}

async fn create_hero(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<HeroSlideDraft>,
) -> CreatedResponse {
    let slide = draft.normalize()?;
    let id = HeroSlideRepo::new(&state.pool).create(&slide).await?;
    tracing::info!(id, "hero slide created");
    Ok(created(id, None))
}

async fn update_hero(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(draft): JsonBody<HeroSlideDraft>,
) -> NoticeResponse {
    let slide = draft.normalize()?;
    HeroSlideRepo::new(&state.pool).update(id, &slide).await?;
    Ok(notice("Slide updated"))
}

async fn delete_hero(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> NoticeResponse {
    HeroSlideRepo::new(&state.pool).delete(id).await?;
    tracing::info!(id, "hero slide deleted");
    Ok(notice("Slide deleted"))
}

/// GET /api/gallery-slides - active slides for the gallery
async fn list_gallery(
    State(state): State<Arc<AppState>>,
) -> SlidesResponse<GallerySlide> {
    let slides = GallerySlideRepo::new(&state.pool).list_active().await?;
    Ok(Envelope::ok(Slides { slides }))
}

async fn list_gallery_admin(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> SlidesResponse<GallerySlide> {
    let slides = GallerySlideRepo::new(&state.pool).list_all().await?;
    Ok(Envelope::ok(Slides { slides }))
}

async fn create_gallery(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<GallerySlideDraft>,
) -> CreatedResponse {
    let slide = draft.normalize()?;
    let id = GallerySlideRepo::new(&state.pool).create(&slide).await?;
    tracing::info!(id, "gallery slide created");
    Ok(created(id, None))
}

async fn update_gallery(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(draft): JsonBody<GallerySlideDraft>,
) -> NoticeResponse {
    let slide = draft.normalize()?;
    GallerySlideRepo::new(&state.pool).update(id, &slide).await?;
    Ok(notice("Slide updated"))
}

async fn delete_gallery(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> NoticeResponse {
    GallerySlideRepo::new(&state.pool).delete(id).await?;
    tracing::info!(id, "gallery slide deleted");
    Ok(notice("Slide deleted"))
}

/// Slide routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/hero-slides", get(list_hero))
        .route("/api/gallery-slides", get(list_gallery))
        .route("/api/admin/hero-slides", get(list_hero_admin).post(create_hero))
        .route("/api/admin/hero-slides/{id}", put(update_hero).delete(delete_hero))
        .route(
            "/api/admin/gallery-slides",
            get(list_gallery_admin).post(create_gallery),
        )
        .route(
            "/api/admin/gallery-slides/{id}",
            put(update_gallery).delete(delete_gallery),
        )
}
