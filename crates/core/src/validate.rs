//! Structured field-level validation errors.
//!
//! Submission payloads are validated at the system edge; failures come back
//! as a list of `{field, message}` pairs so a form can report them inline.

use serde::{Deserialize, Serialize};

/// A single invalid field in a submitted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of the offending field, e.g. `customerEmail` or `items[2].quantity`.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Push a `FieldError` if `value` is empty or whitespace-only.
pub fn require_non_empty(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "is required"));
    }
}
