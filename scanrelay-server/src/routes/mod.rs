use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    AppState,
    handlers::{
        check_credentials_handler, health_handler, root_handler,
        start_scan_handler,
    },
};

pub mod paths {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const SCAN: &str = "/scan";
    pub const CREDENTIALS_CHECK: &str = "/credentials/check";
}

/// Build the full application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(paths::ROOT, get(root_handler))
        .route(paths::HEALTH, get(health_handler))
        .route(paths::SCAN, post(start_scan_handler))
        .route(paths::CREDENTIALS_CHECK, post(check_credentials_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
