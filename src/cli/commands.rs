//! CLI command implementations
//!
//! `serve` follows a fixed boot sequence: load config, install logging,
//! connect the store, bind, serve. Any failure before serving is fatal.

use std::path::Path;
use std::sync::Arc;

use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, log_event_with_fields, Event};
use crate::store::{CarStore, MemoryCarStore, MongoCarStore};

use super::args::Command;
use super::config::{AppConfig, DatabaseConfig};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let _ = dotenvy::dotenv();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Connect to the store and serve the HTTP API until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::load(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    init_logging(&config.log_level);
    log_event(Event::BootStart);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", config.server.socket_addr().as_str()),
            ("database", config.database.name.as_str()),
        ],
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = connect_store(&config.database).await?;
        let server = HttpServer::with_config(config.server.clone(), store);

        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = AppConfig::load(config_path)?;
    write_response(serde_json::to_value(&config)?)
}

/// Open the configured store.
///
/// `memory://` URIs get an in-process store; anything else is a MongoDB
/// connection string that must answer a ping before serving starts.
pub async fn connect_store(database: &DatabaseConfig) -> CliResult<Arc<dyn CarStore>> {
    if database.uses_memory_store() {
        tracing::warn!("using in-memory store; data is lost on exit");
        return Ok(Arc::new(MemoryCarStore::new()));
    }

    log_event(Event::StoreConnecting);

    match MongoCarStore::connect(&database.uri, &database.name, &database.collection).await {
        Ok(store) => {
            log_event_with_fields(
                Event::StoreConnected,
                &[
                    ("database", database.name.as_str()),
                    ("collection", database.collection.as_str()),
                ],
            );
            Ok(Arc::new(store))
        }
        Err(e) => {
            log_event_with_fields(Event::StoreConnectFailed, &[("error", e.to_string().as_str())]);
            Err(CliError::store_connect_failed(format!(
                "Database connection failed: {}",
                e
            )))
        }
    }
}
