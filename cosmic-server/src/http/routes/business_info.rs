//! Business profile endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use cosmic_core::models::{BusinessInfoUpdate, SocialMedia};
use serde::Serialize;

use crate::db::repos::{BusinessInfo, BusinessInfoRepo};
use crate::http::envelope::{notice, Envelope, Notice};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody};
use crate::http::server::AppState;

/// Flat columns plus the nested social links
#[derive(Serialize)]
pub struct BusinessInfoPayload {
    #[serde(flatten)]
    pub info: BusinessInfo,
    #[serde(rename = "socialMedia")]
    pub social_media: SocialMedia,
}

/// GET /api/business-info
async fn get_info(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<BusinessInfoPayload>>, ApiError> {
    let info = BusinessInfoRepo::new(&state.pool).get().await?;
    let social_media = info.social_media();
    Ok(Envelope::ok(BusinessInfoPayload { info, social_media }))
}

/// POST /api/admin/business-info - replace every column
async fn update_info(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(update): JsonBody<BusinessInfoUpdate>,
) -> Result<Json<Envelope<Notice>>, ApiError> {
    BusinessInfoRepo::new(&state.pool).replace(&update).await?;
    tracing::info!("business info updated");
    Ok(notice("Business info updated"))
}

/// Business info routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/business-info", get(get_info))
        .route("/api/admin/business-info", post(update_info))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::TestApp;
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn seeded_profile_with_nested_socials() {
        let app = TestApp::new().await;
        let response = app.get("/api/business-info").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["success"], true);
        assert_eq!(response.body["business_name"], "Cosmic Astrology");
        assert_eq!(response.body["email_address"], "info@cosmicastrology.com");
        assert_eq!(response.body["whatsapp_number"], "+91 98765 43210");
        assert_eq!(response.body["socialMedia"]["facebook"], Value::Null);
    }

    #[tokio::test]
    async fn update_overwrites_and_projects_socials() {
        let app = TestApp::new().await;
        let cookie = app.login().await;

        let response = app
            .send(
                Method::POST,
                "/api/admin/business-info",
                Some(json!({
                    "business_name": "Cosmic Astrology Pune",
                    "facebook_url": "https://facebook.com/cosmic",
                    "youtube_url": "https://youtube.com/@cosmic",
                    "hours_sunday": "Closed",
                })),
                Some(&cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({ "success": true, "message": "Business info updated" }));

        let body = app.get("/api/business-info").await.body;
        assert_eq!(body["business_name"], "Cosmic Astrology Pune");
        assert_eq!(body["facebook_url"], "https://facebook.com/cosmic");
        assert_eq!(body["socialMedia"]["facebook"], "https://facebook.com/cosmic");
        assert_eq!(body["socialMedia"]["youtube"], "https://youtube.com/@cosmic");
        assert_eq!(body["hours_sunday"], "Closed");
        // Omitted on update, so cleared.
        assert_eq!(body["email_address"], Value::Null);
    }

    #[tokio::test]
    async fn update_requires_admin() {
        let app = TestApp::new().await;
        let response = app
            .post("/api/admin/business-info", json!({ "business_name": "Hijacked" }))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.get("/api/business-info").await.body["business_name"], "Cosmic Astrology");
    }
}
