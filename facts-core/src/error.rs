use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Fatal configuration failures raised by the guard before any network
/// activity. The `Display` strings are the observable contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or both settings are absent or null.
    #[error("FETCH_URL and FETCH_FLAG must be valid")]
    MissingSetting,

    /// Both settings are present but at least one has the wrong type.
    #[error("FETCH_URL must be a string and FETCH_FLAG must be a boolean")]
    WrongType,
}

/// Per-iteration fetch failures. All variants are recovered inside the
/// import loop.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: connection refused, timeout, DNS.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status code: {status}")]
    Status { status: u16 },

    /// A 2xx response whose body could not be decoded as a fact record.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// Storage failures surfaced by a repository insert.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("insert failed: {0}")]
    Insert(String),
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Validation failure for a decoded payload, carrying every violated
/// field independently (no short-circuit on the first bad field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn field(&self, name: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == name)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid fact record: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldViolation {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        // Field order out of the validator is a hash map; sort for stable
        // reporting.
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Self { violations }
    }
}
