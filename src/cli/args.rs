//! CLI argument definitions using clap
//!
//! Commands:
//! - car-sensors serve [--config <path>] [--port <port>]
//! - car-sensors check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Car sensors API - CRUD service for car records and sensor readings
#[derive(Parser, Debug)]
#[command(name = "car-sensors")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the document store and serve the HTTP API
    Serve {
        /// Path to JSON configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override, taking precedence over file and environment
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration and exit
    CheckConfig {
        /// Path to JSON configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["car-sensors", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_config() {
        let cli =
            Cli::try_parse_from(["car-sensors", "check-config", "--config", "cars.json"]).unwrap();
        match cli.command {
            Command::CheckConfig { config } => {
                assert_eq!(config, Some(PathBuf::from("cars.json")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["car-sensors", "serve", "--port", "70000"]).is_err());
    }
}
