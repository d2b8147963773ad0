//! CLI module for the car sensors API
//!
//! Provides command-line interface for:
//! - serve: Connect to the store and serve HTTP
//! - check-config: Print the effective configuration

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, connect_store, run, run_command, serve};
pub use config::{AppConfig, DatabaseConfig, MEMORY_URI_SCHEME};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
