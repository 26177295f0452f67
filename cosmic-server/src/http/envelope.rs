//! Uniform `{success, ...payload}` response bodies

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Successful response: `success: true` with the payload's fields inlined.
///
/// The payload must serialize as a map (a struct or JSON object).
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(payload: T) -> Json<Self> {
        Json(Self {
            success: true,
            payload,
        })
    }
}

/// `{message}` payload for writes that return nothing else
#[derive(Debug, Serialize)]
pub struct Notice {
    pub message: &'static str,
}

pub fn notice(message: &'static str) -> Json<Envelope<Notice>> {
    Envelope::ok(Notice { message })
}

/// `{id, message?}` payload for inserts
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// 201 response carrying the new row id.
pub fn created(id: i64, message: Option<&'static str>) -> (StatusCode, Json<Envelope<Created>>) {
    (StatusCode::CREATED, Envelope::ok(Created { id, message }))
}
