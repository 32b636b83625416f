//! Domain model for fact records.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ValidationError;

/// A single fact record as fetched from the upstream API.
///
/// The upstream JSON shape is `{"fact": "...", "length": N}`; `fact` maps
/// onto [`FactRecord::text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FactRecord {
    /// The factual statement. Must be non-empty and at most 500 characters.
    #[serde(rename = "fact")]
    #[validate(length(
        min = 1,
        max = 500,
        message = "Fact cannot be empty or longer than 500 characters"
    ))]
    pub text: String,

    /// Upstream-reported size of the statement. Must be strictly positive.
    #[validate(range(min = 1, message = "Length must be a positive integer"))]
    pub length: i64,
}

impl FactRecord {
    pub fn new(text: impl Into<String>, length: i64) -> Self {
        Self {
            text: text.into(),
            length,
        }
    }

    /// Validate the record against the persistence invariant.
    ///
    /// All field rules are evaluated; a record with an empty `text` and a
    /// non-positive `length` reports both violations.
    pub fn check(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_record() {
        let record = FactRecord::new("Cats sleep for most of the day.", 31);
        assert!(record.check().is_ok());
    }

    #[test]
    fn rejects_empty_text() {
        let err = FactRecord::new("", 42).check().unwrap_err();
        assert!(err.field("text").is_some());
        assert!(err.field("length").is_none());
    }

    #[test]
    fn rejects_zero_length() {
        let err = FactRecord::new("A cat has five toes on each front paw.", 0)
            .check()
            .unwrap_err();
        let violation = err.field("length").unwrap();
        assert_eq!(violation.message, "Length must be a positive integer");
    }

    #[test]
    fn rejects_negative_length() {
        let err = FactRecord::new("Cats cannot taste sweetness.", -55)
            .check()
            .unwrap_err();
        assert!(err.field("length").is_some());
    }

    #[test]
    fn rejects_oversized_text() {
        let err = FactRecord::new("x".repeat(501), 501).check().unwrap_err();
        assert!(err.field("text").is_some());
    }

    #[test]
    fn reports_both_bad_fields_independently() {
        let err = FactRecord::new("", -1).check().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(err.field("text").is_some());
        assert!(err.field("length").is_some());
    }

    #[test]
    fn decodes_the_upstream_field_names() {
        let record: FactRecord =
            serde_json::from_str(r#"{"fact": "Cats have 32 muscles in each ear.", "length": 33}"#)
                .unwrap();
        assert_eq!(record.text, "Cats have 32 muscles in each ear.");
        assert_eq!(record.length, 33);
    }
}
