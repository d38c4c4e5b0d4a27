//! # Error Types
//!
//! Structured validation errors for cgpa_core. Every error is a user-input
//! problem detected before any arithmetic runs; none of them are system faults.
//! Each variant carries enough context to point at the offending field, a
//! stable [`error_code`](ValidationError::error_code) for programmatic handling,
//! and a short [`user_message`](ValidationError::user_message) suitable for a
//! transient banner.
//!
//! ## Example
//!
//! ```rust
//! use cgpa_core::errors::{FormResult, ValidationError};
//!
//! fn require_entries(count: usize) -> FormResult<()> {
//!     if count == 0 {
//!         return Err(ValidationError::EmptyInput);
//!     }
//!     Ok(())
//! }
//!
//! let err = require_entries(0).unwrap_err();
//! assert_eq!(err.error_code(), "EMPTY_INPUT");
//! assert_eq!(err.user_message(), "Please enter at least one SGPA");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::AggregateField;

/// Result type alias for cgpa_core operations
pub type FormResult<T> = Result<T, ValidationError>;

/// Reason a calculate request cannot proceed.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// Per-semester method selected but every entry is empty
    #[error("No SGPA entries provided")]
    EmptyInput,

    /// A per-semester entry is not a number or lies outside [0, 10]
    #[error("SGPA entry {} is '{value}', expected a number between 0 and 10", .index + 1)]
    OutOfRange { index: usize, value: String },

    /// An aggregate field was left empty
    #[error("Missing required field: {field}")]
    MissingField { field: AggregateField },

    /// An aggregate field does not parse as a number
    #[error("Field {field} is '{value}', which is not a number")]
    NotANumber { field: AggregateField, value: String },

    /// Negative total, or a semester count that is not positive
    #[error("Field {field} is out of range: {value}")]
    InvalidRange { field: AggregateField, value: String },

    /// Custom scale selected without a positive scale value
    #[error("Custom scale '{value}' must be a positive number")]
    InvalidCustomScale { value: String },

    /// Decimal arithmetic exceeded the representable range
    #[error("Arithmetic overflow while computing {operation}")]
    Overflow { operation: String },
}

impl ValidationError {
    /// Create an OutOfRange error
    pub fn out_of_range(index: usize, value: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            index,
            value: value.into(),
        }
    }

    /// Create a NotANumber error
    pub fn not_a_number(field: AggregateField, value: impl Into<String>) -> Self {
        ValidationError::NotANumber {
            field,
            value: value.into(),
        }
    }

    /// Create an InvalidRange error
    pub fn invalid_range(field: AggregateField, value: impl Into<String>) -> Self {
        ValidationError::InvalidRange {
            field,
            value: value.into(),
        }
    }

    /// Create an InvalidCustomScale error
    pub fn invalid_custom_scale(value: impl Into<String>) -> Self {
        ValidationError::InvalidCustomScale {
            value: value.into(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        ValidationError::Overflow {
            operation: operation.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "EMPTY_INPUT",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::NotANumber { .. } => "NOT_A_NUMBER",
            ValidationError::InvalidRange { .. } => "INVALID_RANGE",
            ValidationError::InvalidCustomScale { .. } => "INVALID_CUSTOM_SCALE",
            ValidationError::Overflow { .. } => "OVERFLOW",
        }
    }

    /// Human-readable message for the presentation layer.
    ///
    /// One message per error kind, without field context. Use `Display`
    /// for the detailed form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "Please enter at least one SGPA",
            ValidationError::OutOfRange { .. } => "SGPA values must be between 0 and 10",
            ValidationError::MissingField { .. } => {
                "Please enter both Total SGPA and Number of Semesters"
            }
            ValidationError::NotANumber { .. } => {
                "Total SGPA and Number of Semesters must be valid numbers"
            }
            ValidationError::InvalidRange { .. } => {
                "Total SGPA must be non-negative and Number of Semesters must be positive"
            }
            ValidationError::InvalidCustomScale { .. } => {
                "Please enter a valid custom scale (must be a positive number)"
            }
            ValidationError::Overflow { .. } => {
                "The numbers entered are too large to calculate with"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ValidationError::out_of_range(0, "11");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_unit_variant_serialization() {
        let json = serde_json::to_string(&ValidationError::EmptyInput).unwrap();
        assert_eq!(json, r#"{"type":"EmptyInput"}"#);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationError::EmptyInput.error_code(), "EMPTY_INPUT");
        assert_eq!(
            ValidationError::MissingField {
                field: AggregateField::TotalSgpa
            }
            .error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            ValidationError::invalid_custom_scale("").error_code(),
            "INVALID_CUSTOM_SCALE"
        );
    }

    #[test]
    fn test_display_uses_one_based_entry_number() {
        let error = ValidationError::out_of_range(2, "abc");
        assert_eq!(
            error.to_string(),
            "SGPA entry 3 is 'abc', expected a number between 0 and 10"
        );
    }

    #[test]
    fn test_display_names_aggregate_field() {
        let error = ValidationError::invalid_range(AggregateField::SemesterCount, "0");
        assert_eq!(
            error.to_string(),
            "Field Number of Semesters is out of range: 0"
        );
    }

    #[test]
    fn test_user_messages_ignore_context() {
        let a = ValidationError::out_of_range(0, "11");
        let b = ValidationError::out_of_range(5, "-1");
        assert_eq!(a.user_message(), b.user_message());
    }
}
