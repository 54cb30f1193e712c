//! Per-source-address rate limiting middleware.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::config::schema::RateLimitConfig;
use crate::http::response::ErrorBody;
use crate::observability::metrics;

/// Tracked clients above this trigger a prune of expired windows.
const PRUNE_THRESHOLD: usize = 1024;

/// One fixed counting window for a single source address.
struct Window {
    started: Instant,
    count: u32,
}

/// State for the fixed-window rate limiter.
pub struct RateLimiterState {
    windows: Mutex<HashMap<IpAddr, Window>>,
    enabled: bool,
    max_requests: u32,
    window: Duration,
}

impl RateLimiterState {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            enabled: config.enabled,
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_secs),
        }
    }

    /// Record one request from `ip`; returns false when over the limit.
    pub fn check(&self, ip: IpAddr) -> bool {
        if !self.enabled {
            return true;
        }

        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();

        if windows.len() > PRUNE_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = windows.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });
        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count < self.max_requests {
            entry.count += 1;
            true
        } else {
            false
        }
    }
}

/// Middleware function for per-source-address rate limiting.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<Arc<RateLimiterState>>,
    request: Request,
    next: Next,
) -> Response {
    if state.check(addr.ip()) {
        next.run(request).await
    } else {
        tracing::warn!(client = %addr.ip(), "Rate limit exceeded");
        metrics::record_rate_limited();
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorBody::new("Too many requests, please try again later.")),
        )
            .into_response()
    }
}
