//! Application configuration
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. JSON config file (optional)
//! 3. Environment: `MONGODB_URI`, `PORT`, `LOG_LEVEL` (a `.env` file counts)
//! 4. Command-line overrides

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// URI scheme selecting the in-process store
pub const MEMORY_URI_SCHEME: &str = "memory://";

/// Document store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string (default: "mongodb://localhost:27017")
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Database name (default: "car_sensors")
    #[serde(default = "default_database_name")]
    pub name: String,

    /// Collection holding car documents (default: "cars")
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database_name() -> String {
    "car_sensors".to_string()
}

fn default_collection() -> String {
    "cars".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            name: default_database_name(),
            collection: default_collection(),
        }
    }
}

impl DatabaseConfig {
    /// True for `memory://` URIs
    pub fn uses_memory_store(&self) -> bool {
        self.uri.starts_with(MEMORY_URI_SCHEME)
    }
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log filter directive (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            database: DatabaseConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional file plus the process environment
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a JSON config file; missing keys take defaults
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = lookup("MONGODB_URI") {
            self.database.uri = uri;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid PORT: '{}'", port)))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.database.uri.trim().is_empty() {
            return Err(CliError::config_error("database.uri must not be empty"));
        }

        if self.database.name.trim().is_empty() {
            return Err(CliError::config_error("database.name must not be empty"));
        }

        if self.database.collection.trim().is_empty() {
            return Err(CliError::config_error(
                "database.collection must not be empty",
            ));
        }

        if EnvFilter::try_new(&self.log_level).is_err() {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'",
                self.log_level
            )));
        }

        Ok(())
    }
}
