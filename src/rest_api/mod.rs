//! # Car REST API
//!
//! Controller for the car resource plus the mapping of its outcomes to
//! HTTP statuses and JSON bodies.

pub mod errors;
pub mod handler;
pub mod response;

pub use errors::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
pub use handler::CarController;
pub use response::{ErrorListResponse, MessageResponse, DELETED_MESSAGE};
