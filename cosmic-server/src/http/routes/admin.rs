//! Admin gate: login, logout and session check
//!
//! A successful login sets an HttpOnly session cookie. Any failed attempt
//! also revokes the session the caller arrived with.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::SessionId;
use crate::db::repos::AdminRepo;
use crate::http::envelope::{notice, Envelope};
use crate::http::error::ApiError;
use crate::http::server::AppState;

pub const INVALID_PASSWORD: &str = "Invalid password";
pub const PASSWORD_REQUIRED: &str = "Password required";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// POST /api/admin/login
///
/// The presented session is revoked before the body is looked at, so an
/// unreadable body logs the caller out like a wrong password does.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(existing) = SessionId::from_jar(&jar) {
        state.sessions.revoke(&existing).await;
    }

    let password = match body {
        Ok(Json(req)) => req.password.filter(|p| !p.is_empty()),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable login body");
            None
        }
    };
    let Some(password) = password else {
        return Err(ApiError::InvalidCredential(PASSWORD_REQUIRED));
    };

    if !AdminRepo::new(&state.pool).verify(&password).await? {
        tracing::warn!("admin login rejected");
        return Err(ApiError::InvalidCredential(INVALID_PASSWORD));
    }

    let session = state.sessions.issue().await;
    tracing::info!("admin logged in");
    Ok((jar.add(session.cookie()), notice("Login successful")))
}

/// POST /api/admin/logout - always succeeds
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    if let Some(session) = SessionId::from_jar(&jar) {
        if state.sessions.revoke(&session).await {
            tracing::info!("admin logged out");
        }
    }

    (jar.add(SessionId::removal_cookie()), notice("Logged out"))
}

/// GET /api/admin/session
async fn session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Json<Envelope<SessionStatus>> {
    let authenticated = match SessionId::from_jar(&jar) {
        Some(id) => state.sessions.is_authenticated(&id).await,
        None => false,
    };
    Envelope::ok(SessionStatus { authenticated })
}

/// Admin gate routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/logout", post(logout))
        .route("/api/admin/session", get(session))
}
