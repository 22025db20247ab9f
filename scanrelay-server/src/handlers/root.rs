use axum::{extract::State, response::Json};
use serde_json::{Value, json};
use tracing::info;

use crate::infra::app_state::AppState;

pub async fn root_handler() -> Json<Value> {
    info!("Root endpoint called");
    Json(json!({ "message": "Hello, World!" }))
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let publisher = if state.publisher().is_configured() {
        "configured"
    } else {
        "unconfigured"
    };

    let publish_timeout_ms =
        u64::try_from(state.config().publisher.timeout.as_millis())
            .unwrap_or(u64::MAX);

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "publisher": publisher,
        "publish_timeout_ms": publish_timeout_ms,
    }))
}
