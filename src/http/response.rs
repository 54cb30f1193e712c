//! Response envelopes and boundary fault mapping.
//!
//! # Responsibilities
//! - Fixed JSON shapes for acknowledgments and errors
//! - Map validation failures to 400 responses
//! - Map unexpected handler faults to an opaque 500 (detail is logged,
//!   never exposed to the caller)

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lead::ValidationError;

/// Fixed success acknowledgment for a valid submission.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: &'static str,
}

impl Ack {
    pub fn submitted() -> Self {
        Self {
            success: true,
            message: "Quote request submitted successfully!",
        }
    }
}

/// Error envelope shared by validation, rate-limit, and fault responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Health probe response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorBody::new(self.message))).into_response()
    }
}

/// Convert a handler panic into the opaque generic failure response.
///
/// Installed via `CatchPanicLayer`; the underlying detail goes to the log
/// only.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(error = %detail, "Unhandled failure while processing request");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("Something went wrong. Please try again.")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_envelope_shape() {
        let json = serde_json::to_value(Ack::submitted()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Quote request submitted successfully!");
    }

    #[test]
    fn validation_error_maps_to_400() {
        let err = ValidationError {
            field: "email",
            message: "A valid email address is required.",
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
