use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::service::StoreStats;
use crate::AppContext;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the taskd demo API" }))
}

pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let uptime = ctx.started_at.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": uptime,
    }))
}

pub async fn stats(State(ctx): State<Arc<AppContext>>) -> Json<StoreStats> {
    Json(ctx.service.stats().await)
}
