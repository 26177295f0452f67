//! Contact form endpoints: public submission and admin inbox

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use cosmic_core::models::{ContactDraft, MessageStatus};
use serde::Serialize;

use crate::db::repos::{ContactMessage, MessageRepo};
use crate::http::envelope::{created, notice, Created, Envelope, Notice};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, ValidId};
use crate::http::server::AppState;

use super::StatusUpdate;

#[derive(Serialize)]
pub struct Messages {
    pub messages: Vec<ContactMessage>,
}

/// POST /api/contact
async fn send_message(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<ContactDraft>,
) -> Result<(StatusCode, Json<Envelope<Created>>), ApiError> {
    let message = draft.normalize()?;
    let id = MessageRepo::new(&state.pool).create(&message).await?;
    tracing::info!(id, "contact message received");
    Ok(created(id, Some("Message sent")))
}

/// GET /api/admin/messages
async fn list_messages(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Messages>>, ApiError> {
    let messages = MessageRepo::new(&state.pool).list_recent().await?;
    Ok(Envelope::ok(Messages { messages }))
}

/// PUT /api/admin/messages/{id}/status
async fn set_status(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(update): JsonBody<StatusUpdate>,
) -> Result<Json<Envelope<Notice>>, ApiError> {
    let status: MessageStatus = update.parse()?;
    MessageRepo::new(&state.pool).set_status(id, status).await?;
    Ok(notice("Status updated"))
}

/// Contact message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/contact", post(send_message))
        .route("/api/admin/messages", get(list_messages))
        .route("/api/admin/messages/{id}/status", put(set_status))
}
