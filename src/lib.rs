//! car-sensors-api - CRUD HTTP API for car records and their sensor readings
//!
//! Request pipeline: router -> validation -> controller -> store.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod store;
pub mod validation;
