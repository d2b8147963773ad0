//! # Response Formatting
//!
//! Non-record bodies returned by the car resource.

use serde::Serialize;

use crate::validation::{FieldError, ValidationErrors};

/// Confirmation of a successful delete
pub const DELETED_MESSAGE: &str = "Car deleted successfully";

/// `{ "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn deleted() -> Self {
        Self::new(DELETED_MESSAGE)
    }
}

/// `{ "errors": [ { "field": ..., "message": ... } ] }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorListResponse {
    pub errors: Vec<FieldError>,
}

impl From<ValidationErrors> for ErrorListResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            errors: errors.into_errors(),
        }
    }
}
