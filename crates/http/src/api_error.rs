//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body. Handlers
//! return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quotebook_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`. The `Internal`
/// variant logs the real error server-side and returns a static message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: blank fields, unknown category, malformed import.
    BadRequest(String),
    /// 404 Not Found: nothing to pick from.
    NotFound(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
    /// 503 Service Unavailable: remote endpoint not configured.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_invalid_input() {
            return Self::BadRequest(err.to_string());
        }
        if err.is_empty_collection() {
            return Self::NotFound(err.to_string());
        }
        match err {
            ServiceError::NotConfigured(msg) => Self::ServiceUnavailable(msg),
            _ => Self::Internal(err.into()),
        }
    }
}
