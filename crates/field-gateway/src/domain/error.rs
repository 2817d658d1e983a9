//! Error taxonomy for the gateway.
//!
//! Two tiers reach the wire: client input errors (400, one constructor
//! per validation rule) and internal errors (500). Routing errors
//! (404/405) are orthogonal to payload content. [`GatewayError`] stays
//! internal and never serializes to a response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt;

/// Wire-level API error: HTTP status plus an `{error, detail}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status the error maps to.
    pub status: StatusCode,
    /// Human-readable problem description (`error` on the wire).
    pub message: String,
    /// Contextual info: offending index, received value, or a hint.
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: detail.into(),
        }
    }

    fn bad_request(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, detail)
    }

    // Validation rules, in check order.

    /// Rule 1: payload absent, null, or not a non-empty object.
    pub fn no_data() -> Self {
        Self::bad_request("no data sent", "send a JSON body with 'I' and 'distances'")
    }

    /// Rule 2: the `I` field is missing.
    pub fn missing_current() -> Self {
        Self::bad_request("current field missing", "send the current 'I' in amperes")
    }

    /// Rule 3: the `distances` field is missing.
    pub fn missing_distances() -> Self {
        Self::bad_request(
            "distances field missing",
            "send an array of distances in meters",
        )
    }

    /// Rule 4: `I` is not coercible to a number.
    pub fn current_not_numeric(received_type: &str) -> Self {
        Self::bad_request(
            "current must be a number",
            format!("received: {received_type}"),
        )
    }

    /// Rule 5: `distances` is not an array.
    pub fn distances_not_array(received_type: &str) -> Self {
        Self::bad_request(
            "distances must be an array",
            format!("received: {received_type}"),
        )
    }

    /// Rule 6: `distances` is empty.
    pub fn empty_distances() -> Self {
        Self::bad_request("distances array is empty", "provide at least one distance")
    }

    /// Rule 7: the coerced current is not strictly positive.
    pub fn non_positive_current(received: f64) -> Self {
        Self::bad_request(
            "current must be greater than zero",
            format!("received: {received} A"),
        )
    }

    /// Rule 8: element at `index` is not coercible to a number.
    pub fn distance_not_numeric(index: usize, raw: &serde_json::Value) -> Self {
        Self::bad_request(
            format!("distance at index {index} is not a valid number"),
            format!("received: {raw}"),
        )
    }

    /// Rule 9: the coerced element at `index` is not strictly positive.
    pub fn non_positive_distance(index: usize, received: f64) -> Self {
        Self::bad_request(
            format!("distance at index {index} must be greater than zero"),
            format!("received: {received} m"),
        )
    }

    /// Calculator domain error surfaced on the HTTP path. Unreachable
    /// after successful validation; kept as the second line of defense.
    pub fn calculation(source: &crate::physics::FieldError) -> Self {
        Self::bad_request("calculation error", source.to_string())
    }

    /// Unexpected failure outside the validated path.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error",
            detail,
        )
    }

    /// No route matched the request URL.
    pub fn route_not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "route not found",
            "check the request URL",
        )
    }

    /// A known route was hit with a disallowed method.
    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "HTTP method not allowed",
            "check the method (GET, POST, etc.)",
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status.as_u16(), self.message, self.detail)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message,
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

/// Result type for handler-level operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (startup and serving, not wire-visible).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server runtime error
    #[error("server error: {0}")]
    Serve(String),
}
