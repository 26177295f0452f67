//! API error types with IntoResponse
//!
//! Every failure leaves as `{success: false, error: "<short reason>"}`.
//! Store failures are logged here and never echoed to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cosmic_core::ValidationError;
use serde_json::json;

use crate::db::repos::DbError;

pub const UNAUTHORIZED_MESSAGE: &str = "Admin login required";
pub const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Draft failed a field rule (400)
    Validation(ValidationError),

    /// Body or path could not be parsed (400)
    InvalidInput(String),

    /// Row does not exist (404)
    NotFound(String),

    /// Wrong or missing admin password (401)
    InvalidCredential(&'static str),

    /// Admin route without an authenticated session (401)
    Unauthorized,

    /// Database or credential backend failed (503, logged)
    StoreUnavailable(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidCredential(_) | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidInput(reason) | Self::NotFound(reason) => reason.clone(),
            Self::InvalidCredential(reason) => (*reason).to_owned(),
            Self::Unauthorized => UNAUTHORIZED_MESSAGE.to_owned(),
            Self::StoreUnavailable(_) => UNAVAILABLE_MESSAGE.to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::StoreUnavailable(e) = &self {
            tracing::error!(error = %e, "store operation failed");
        }

        let body = json!({
            "success": false,
            "error": self.message(),
        });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound(e.to_string()),
            _ => Self::StoreUnavailable(e),
        }
    }
}
