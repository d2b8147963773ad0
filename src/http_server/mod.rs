//! # HTTP Server Module
//!
//! Axum server exposing the car resource.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/cars` - Car CRUD
//! - `/tester` and static assets - when `static_dir` is configured
//!
//! Every request passes through `TraceLayer` and the `log_request`
//! middleware before reaching its route.

pub mod car_routes;
pub mod config;
pub mod middleware;
pub mod observability_routes;
pub mod server;
pub mod static_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
