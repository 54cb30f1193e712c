//! Lead-capture relay service.
//!
//! Accepts quote-request submissions over HTTP, validates them, and relays
//! the resulting lead record to the configured downstream sinks.
//!
//! # Data Flow
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http/server ──▶ lead (validate,        │
//!                             │       │            normalize)            │
//!                             │       │                │                 │
//!                             │       │                ▼                 │
//!                             │       │          sink/dispatch ──────────┼──▶ webhook
//!                             │       │          (8s settle ceiling)     │
//!     Acknowledgment          │       ▼                └─────────────────┼──▶ leads API
//!     ◀───────────────────────┼─ http/response                           │
//!                             │                                          │
//!                             │  Cross-cutting: config · security        │
//!                             │  (rate limit, CORS) · observability      │
//!                             └──────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use lead_relay::config;
use lead_relay::http::HttpServer;
use lead_relay::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!("lead-relay v{} starting", env!("CARGO_PKG_VERSION"));

    // Configuration is read from the environment exactly once; handlers only
    // ever see the resulting immutable struct.
    let config = config::load_from_env()?;
    config::validate_config(&config)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        webhook_sink = config.sinks.webhook_url.is_some(),
        api_sink = config.sinks.api_url.is_some(),
        rate_limit_max = config.rate_limit.max_requests,
        rate_limit_window_secs = config.rate_limit.window_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
