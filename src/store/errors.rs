//! Store error types

use mongodb::bson;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the persistence gateway.
///
/// "No such record" is never an error; it is reported as `None`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id is not a well-formed object id
    #[error("Invalid car id: {0}")]
    InvalidId(String),

    /// Driver-level failure (connectivity, server error, ...)
    #[error("Document store error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// A record could not be encoded as BSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    /// In-memory store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}
