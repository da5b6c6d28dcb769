//! Route tables.

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Airport resource routes: collection and item.
pub fn airport_routes(state: AppState) -> Router {
    Router::new()
        .route("/airports", get(handlers::list).post(handlers::create))
        .route(
            "/airports/:code",
            get(handlers::get)
                .put(handlers::update)
                .delete(handlers::delete),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes (no state): GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}
