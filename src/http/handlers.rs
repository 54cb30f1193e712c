//! Route handlers.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::http::request::{self, JsonOrForm};
use crate::http::response::{Ack, HealthStatus};
use crate::http::server::AppState;
use crate::lead::{LeadRecord, SubmitPayload};
use crate::observability::metrics;

/// `POST /api/submit` — validate a submission, forward the lead, acknowledge.
///
/// Sink outcomes never influence the response: once validation passes and
/// the dispatch wait resolves, the caller gets the fixed acknowledgment.
pub async fn submit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    JsonOrForm(payload): JsonOrForm<SubmitPayload>,
) -> Response {
    let referrer = request::referrer(&headers);

    let record = match LeadRecord::from_payload(payload, referrer, addr.ip()) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(field = err.field, "Submission rejected");
            metrics::record_submission("invalid");
            return err.into_response();
        }
    };

    let service = if record.service.is_empty() {
        "no service selected"
    } else {
        record.service.as_str()
    };
    tracing::info!(email = %record.email, service = %service, "New quote request received");

    state.dispatcher.dispatch(&record).await;

    metrics::record_submission("accepted");
    (StatusCode::OK, Json(Ack::submitted())).into_response()
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        timestamp: Utc::now(),
    })
}
