//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::RelayStatusDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current relay status: how many connections are registered
pub async fn relay_status(State(state): State<Arc<AppState>>) -> Json<RelayStatusDto> {
    let connections = state.registry.connection_count().await;
    Json(RelayStatusDto { connections })
}
