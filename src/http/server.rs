//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, body limit, CORS,
//!   security headers, rate limiting, panic boundary)
//! - Bind the server to a listener and serve with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::schema::AppConfig;
use crate::http::{handlers, response};
use crate::security::headers;
use crate::security::rate_limit::{rate_limit_middleware, RateLimiterState};
use crate::sink::SinkDispatcher;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<SinkDispatcher>,
}

/// HTTP server for the lead relay.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let dispatcher = Arc::new(SinkDispatcher::from_config(&config.sinks)?);
        let limiter = Arc::new(RateLimiterState::new(&config.rate_limit));

        let state = AppState { dispatcher };
        let router = Self::build_router(&config, state, limiter);

        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState, limiter: Arc<RateLimiterState>) -> Router {
        // Only the submission endpoint is rate limited; health probes are not.
        let api = Router::new()
            .route("/api/submit", post(handlers::submit))
            .route_layer(middleware::from_fn_with_state(limiter, rate_limit_middleware));

        // Later layers wrap earlier ones: request IDs are assigned outermost
        // so the trace span and every log line below see them.
        let router = Router::new()
            .merge(api)
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(headers::cors_layer(&config.cors))
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(CatchPanicLayer::custom(response::handle_panic))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

        headers::with_security_headers(router)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
