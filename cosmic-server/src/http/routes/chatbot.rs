//! Chat widget configuration endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use cosmic_core::models::ChatbotConfigUpdate;
use serde::Serialize;

use crate::db::repos::{ChatbotConfig, ChatbotConfigRepo};
use crate::http::envelope::{notice, Envelope, Notice};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody};
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct ConfigPayload {
    pub config: ChatbotConfig,
}

/// GET /api/chatbot-config
async fn get_config(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<ConfigPayload>>, ApiError> {
    let config = ChatbotConfigRepo::new(&state.pool).get().await?;
    Ok(Envelope::ok(ConfigPayload { config }))
}

/// POST /api/chatbot-config - admin only, replaces every column
async fn update_config(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(update): JsonBody<ChatbotConfigUpdate>,
) -> Result<Json<Envelope<Notice>>, ApiError> {
    ChatbotConfigRepo::new(&state.pool).replace(&update).await?;
    tracing::info!("chatbot config updated");
    Ok(notice("Config updated"))
}

/// Chatbot config routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/chatbot-config", get(get_config).post(update_config))
}
