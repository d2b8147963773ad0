//! CLI-specific error types
//!
//! Every CLI error is fatal: the process reports it and exits non-zero
//! before serving a single request.

use std::fmt;
use std::io;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or override error
    ConfigError,
    /// I/O error (stdout, runtime creation)
    IoError,
    /// Document store unreachable at startup
    StoreConnectFailed,
    /// Listener could not bind, or serving aborted
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CARS_CLI_CONFIG_ERROR",
            Self::IoError => "CARS_CLI_IO_ERROR",
            Self::StoreConnectFailed => "CARS_CLI_STORE_CONNECT_FAILED",
            Self::ServeFailed => "CARS_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Store connection failed
    pub fn store_connect_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::StoreConnectFailed, msg)
    }

    /// Serving failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::store_connect_failed("connection refused");
        assert_eq!(
            err.to_string(),
            "CARS_CLI_STORE_CONNECT_FAILED: connection refused"
        );
        assert_eq!(err.code(), &CliErrorCode::StoreConnectFailed);
    }

    #[test]
    fn test_io_error_conversion() {
        let err = CliError::from(io::Error::new(io::ErrorKind::AddrInUse, "port taken"));
        assert_eq!(err.code_str(), "CARS_CLI_IO_ERROR");
        assert_eq!(err.message(), "port taken");
    }
}
