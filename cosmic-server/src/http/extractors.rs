//! Custom Axum extractors

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::server::AppState;
use crate::auth::SessionId;

/// JSON body whose rejections use the error envelope
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::InvalidInput(rejection_reason(&rejection))),
        }
    }
}

fn rejection_reason(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "Expected a JSON body".to_owned(),
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON body".to_owned(),
        JsonRejection::JsonDataError(_) => "Invalid field in JSON body".to_owned(),
        _ => "Unreadable request body".to_owned(),
    }
}

/// Positive integer row id from the path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidInput("id must be a positive integer".into()))?;

        if id < 1 {
            return Err(ApiError::InvalidInput("id must be a positive integer".into()));
        }
        Ok(Self(id))
    }
}

/// Proof that the caller holds an authenticated admin session
pub struct AdminSession(pub SessionId);

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let id = SessionId::from_jar(&jar).ok_or(ApiError::Unauthorized)?;
        if state.sessions.is_authenticated(&id).await {
            Ok(Self(id))
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}
