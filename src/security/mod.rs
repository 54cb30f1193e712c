//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → headers.rs (CORS policy, security response headers)
//!     → rate_limit.rs (per-source-address window on /api/submit)
//!     → Pass to handlers
//! ```
//!
//! # Design Decisions
//! - Fail closed: over-limit requests are rejected before validation
//! - No trust in client forwarding headers; the socket peer is the client

pub mod headers;
pub mod rate_limit;

pub use rate_limit::RateLimiterState;
