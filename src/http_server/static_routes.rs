//! Static file routes
//!
//! Serves a directory of assets, with `/tester` mapped to the manual API
//! test page. Only mounted when `static_dir` is configured.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// File served at `/tester`
pub const TESTER_PAGE: &str = "car_sensors_api_tester.html";

/// Create static routes rooted at `dir`
pub fn static_routes(dir: &Path) -> Router {
    Router::new()
        .route_service("/tester", ServeFile::new(dir.join(TESTER_PAGE)))
        .fallback_service(ServeDir::new(dir))
}
