//! Request extraction.
//!
//! # Responsibilities
//! - Accept submission bodies as JSON or urlencoded form, keyed on
//!   Content-Type
//! - Capture the originating referrer for the lead record
//!
//! # Design Decisions
//! - Extraction rejections use the same JSON envelope as every other error
//! - Unknown content types are rejected up front (415), not sniffed

use axum::{
    extract::{Form, FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::http::response::ErrorBody;

/// Extractor that accepts either a JSON or an urlencoded form body.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    (rejection.status(), Json(ErrorBody::new(rejection.body_text())))
                        .into_response()
                })?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    (rejection.status(), Json(ErrorBody::new(rejection.body_text())))
                        .into_response()
                })?;
            return Ok(Self(value));
        }

        Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorBody::new("Expected a JSON or form-encoded body.")),
        )
            .into_response())
    }
}

/// Originating referrer, or "direct" when the header is absent.
pub fn referrer(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("direct")
        .to_string()
}
