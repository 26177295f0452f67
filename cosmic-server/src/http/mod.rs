//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - `{success, ...}` JSON envelopes for every response

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, HeaderMap, Method, Request, StatusCode};
    use axum::Router;
    use axum_extra::extract::cookie::Cookie;
    use cosmic_core::config::AdminSection;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::server::{build_router, AppState, ServerConfig};
    use crate::auth::SessionStore;
    use crate::db::{create_memory_pool, migrations, seed};

    /// Seeded password for the test admin account
    pub const ADMIN_PASSWORD: &str = "Admin@12";

    pub struct TestApp {
        pub router: Router,
        pub state: Arc<AppState>,
    }

    pub struct TestResponse {
        pub status: StatusCode,
        pub headers: HeaderMap,
        pub body: Value,
    }

    impl TestApp {
        pub async fn new() -> Self {
            let pool = create_memory_pool().await.expect("pool creation failed");
            migrations::run(&pool).await.expect("migrations failed");
            let admin = AdminSection {
                username: "admin".into(),
                password: ADMIN_PASSWORD.into(),
            };
            seed::run(&pool, &admin).await.expect("seed failed");

            let state = Arc::new(AppState {
                pool,
                sessions: SessionStore::new(),
            });
            let router = build_router(state.clone(), &ServerConfig::default());
            Self { router, state }
        }

        pub async fn send(
            &self,
            method: Method,
            uri: &str,
            body: Option<Value>,
            cookie: Option<&str>,
        ) -> TestResponse {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(cookie) = cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            let request = match body {
                Some(json) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json.to_string())),
                None => builder.body(Body::empty()),
            }
            .expect("request build failed");

            let response = self.router.clone().oneshot(request).await.expect("router failed");
            let status = response.status();
            let headers = response.headers().clone();
            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("body read failed");
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("body is not JSON")
            };

            TestResponse { status, headers, body }
        }

        pub async fn get(&self, uri: &str) -> TestResponse {
            self.send(Method::GET, uri, None, None).await
        }

        pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
            self.send(Method::POST, uri, Some(body), None).await
        }

        /// Log in and return the `Cookie` header value for the session.
        pub async fn login(&self) -> String {
            let response = self
                .post("/api/admin/login", serde_json::json!({ "password": ADMIN_PASSWORD }))
                .await;
            assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
            response.session_cookie().expect("login set no cookie")
        }
    }

    impl TestResponse {
        /// `name=value` pair from the response's `Set-Cookie` header.
        pub fn session_cookie(&self) -> Option<String> {
            let set_cookie = self.headers.get(header::SET_COOKIE)?.to_str().ok()?;
            let cookie = Cookie::parse(set_cookie).ok()?;
            Some(format!("{}={}", cookie.name(), cookie.value()))
        }
    }
}
