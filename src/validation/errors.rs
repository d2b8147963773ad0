//! Validation error types

use serde::Serialize;
use thiserror::Error;

/// Result type for payload validation
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// One violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the offending field, e.g. `sensors[1].value`
    pub field: String,
    /// Client-facing message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered, non-empty list of violated rules.
///
/// The full list is always reported; validation never stops at the first
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("payload failed validation with {} error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding exactly one error
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Messages in rule order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_order_is_preserved() {
        let mut errors = ValidationErrors::new();
        errors.push("model", "Model is required");
        errors.push("year", "Year must be a number");

        assert_eq!(
            errors.messages(),
            vec!["Model is required", "Year must be a number"]
        );
        assert_eq!(errors.to_string(), "payload failed validation with 2 error(s)");
    }

    #[test]
    fn test_field_error_serialization() {
        let json = serde_json::to_value(FieldError::new("year", "Year must be a number")).unwrap();
        assert_eq!(json["field"], "year");
        assert_eq!(json["message"], "Year must be a number");
    }
}
