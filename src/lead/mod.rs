//! Lead domain model.
//!
//! # Data Flow
//! ```text
//! raw submission fields (SubmitPayload)
//!     → validation.rs (ordered checks, first failure wins)
//!     → record.rs (trim, lowercase email, stamp receipt metadata)
//!     → LeadRecord (immutable, serialized to sinks, never persisted)
//! ```
//!
//! # Design Decisions
//! - A record exists only for the duration of one request
//! - Optional fields normalize to empty strings, not nulls
//! - Validation messages are caller-facing and returned verbatim

pub mod record;
pub mod validation;

pub use record::{LeadRecord, SubmitPayload};
pub use validation::ValidationError;
