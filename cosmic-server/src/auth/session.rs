//! Opaque session flag for the admin gate
//!
//! A session is a random id carried in a cookie. The server keeps the ids
//! that have passed `login` together with when they were issued; nothing
//! else is stored per session. Sessions lapse after [`SESSION_TTL`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "cosmic_session";

/// How long an admin session stays valid after login
pub const SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Session id presented by the client, if it parses.
    pub fn from_jar(jar: &CookieJar) -> Option<Self> {
        jar.get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .map(Self)
    }

    /// Cookie binding this session to the client.
    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, self.0.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }

    /// Cookie that tells the client to drop its session.
    pub fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        cookie.make_removal();
        cookie
    }
}

/// Authenticated session ids, shared across handlers
#[derive(Debug, Clone)]
pub struct SessionStore {
    ttl: Duration,
    issued: Arc<RwLock<HashMap<SessionId, Instant>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            issued: Arc::default(),
        }
    }

    /// Issue a fresh authenticated session, sweeping lapsed ones.
    ///
    /// Ids are never taken from the client, so a planted cookie cannot
    /// become an admin session.
    pub async fn issue(&self) -> SessionId {
        let id = SessionId::generate();
        let now = Instant::now();
        let mut issued = self.issued.write().await;

        let before = issued.len();
        issued.retain(|_, at| now.duration_since(*at) < self.ttl);
        let swept = before - issued.len();
        if swept > 0 {
            tracing::debug!(swept, "dropped expired admin sessions");
        }

        issued.insert(id, now);
        id
    }

    pub async fn is_authenticated(&self, id: &SessionId) -> bool {
        self.issued
            .read()
            .await
            .get(id)
            .is_some_and(|at| at.elapsed() < self.ttl)
    }

    /// Drop a session; returns whether it was live.
    pub async fn revoke(&self, id: &SessionId) -> bool {
        self.issued
            .write()
            .await
            .remove(id)
            .is_some_and(|at| at.elapsed() < self.ttl)
    }
}
