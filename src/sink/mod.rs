//! Downstream delivery subsystem.
//!
//! # Data Flow
//! ```text
//! LeadRecord
//!     → dispatch.rs (one spawned task per configured sink)
//!     → webhook sink      (JSON POST)
//!     → leads API sink    (JSON POST + bearer credential)
//!
//! Handler waits: first-of(all sinks settled, 8s ceiling)
//! Ceiling hit → respond anyway; in-flight deliveries keep running
//! ```
//!
//! # Design Decisions
//! - Sink failures are logged, never retried, never surfaced to callers
//! - No ordering between sinks; each delivery is independent
//! - The ceiling bounds the caller's wait, not the deliveries themselves

pub mod dispatch;

pub use dispatch::{Sink, SinkDispatcher, SETTLE_CEILING};
