//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when a mutation's preconditions are not met.
///
/// A mutation that fails validation leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("No {entity} found with id '{id}'")]
    MissingReference { entity: &'static str, id: String },

    #[error("No active cycle; create or select a cycle first")]
    NoActiveCycle,
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing reference error for an entity id.
    pub fn missing_reference(entity: &'static str, id: impl Into<String>) -> Self {
        ValidationError::MissingReference {
            entity,
            id: id.into(),
        }
    }
}

/// Returns the trimmed value, or an `EmptyField` error when nothing is left.
pub fn require_non_empty(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("title");
        assert_eq!(format!("{}", err), "Field 'title' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("week", 1, 12, 13);
        assert_eq!(
            format!("{}", err),
            "Field 'week' must be between 1 and 12, got 13"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("start_date", "expected YYYY-MM-DD");
        assert_eq!(
            format!("{}", err),
            "Field 'start_date' has invalid format: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn validation_error_missing_reference_names_entity_and_id() {
        let err = ValidationError::missing_reference("main goal", "abc");
        assert_eq!(format!("{}", err), "No main goal found with id 'abc'");
    }

    #[test]
    fn require_non_empty_trims_value() {
        assert_eq!(require_non_empty("title", "  Ship it ").unwrap(), "Ship it");
    }

    #[test]
    fn require_non_empty_rejects_whitespace() {
        let result = require_non_empty("title", "   ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "title"),
            _ => panic!("Expected EmptyField error"),
        }
    }
}
