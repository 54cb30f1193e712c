//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read & parse variables)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed explicitly into the server constructor
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so an empty environment still boots a
//!   log-only service
//! - Validation separates syntactic (parsing) from semantic checks
//! - Handler logic never reads the environment directly

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, ConfigError};
pub use schema::AppConfig;
pub use validation::validate_config;
