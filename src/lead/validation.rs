//! Submission field validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::lead::record::SubmitPayload;

/// Basic `local@domain` shape. Anything stricter rejects real addresses.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A caller-visible validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Wire name of the offending field.
    pub field: &'static str,

    /// Message returned verbatim to the caller.
    pub message: &'static str,
}

/// Check submission fields in order; the first failure wins.
pub fn check(payload: &SubmitPayload) -> Result<(), ValidationError> {
    if is_blank(&payload.full_name) {
        return Err(ValidationError {
            field: "fullName",
            message: "Full name is required.",
        });
    }

    let email = payload.email.as_deref().unwrap_or("").trim();
    if email.is_empty() || !EMAIL_RE.is_match(email) {
        return Err(ValidationError {
            field: "email",
            message: "A valid email address is required.",
        });
    }

    if is_blank(&payload.message) {
        return Err(ValidationError {
            field: "message",
            message: "Please include a message about your project.",
        });
    }

    Ok(())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
