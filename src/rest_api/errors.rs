//! # REST API Errors
//!
//! Error types for the car resource and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationErrors;

use super::response::{ErrorListResponse, MessageResponse};

/// Body of every 404 from the car resource
pub const NOT_FOUND_MESSAGE: &str = "Car not found";

/// Body of every 500; internal detail is never exposed
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Result type for controller operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Controller errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Payload violated one or more field rules
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// No car with the requested id
    #[error("Car not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything the store reports, malformed ids included
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(errors) => {
                tracing::debug!(count = errors.len(), "rejected car payload");
                (status, Json(ErrorListResponse::from(errors))).into_response()
            }
            ApiError::NotFound => (status, Json(MessageResponse::new(NOT_FOUND_MESSAGE))).into_response(),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "car store operation failed");
                (status, Json(MessageResponse::new(GENERIC_ERROR_MESSAGE))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationErrors::single("model", "Model is required"))
                .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(StoreError::Poisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_propagation() {
        let api_err = ApiError::from(StoreError::InvalidId("x".to_string()));
        assert_eq!(api_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_status() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Store(StoreError::Poisoned).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
