//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (JSON-or-form extraction, referrer capture)
//!     → handlers.rs (validate → build record → dispatch → acknowledge)
//!     → response.rs (JSON envelopes, boundary fault mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
