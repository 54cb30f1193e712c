//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, Prometheus exposition)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Structured logging; field values, not formatted strings
//! - Metrics are cheap counters and never on a hot lock
//! - The exporter is opt-in so the default deployment stays single-port

pub mod logging;
pub mod metrics;
