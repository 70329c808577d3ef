// ============================
// roombooker-backend-lib/src/handlers/mod.rs
// ============================
//! HTTP request handlers.

pub mod admin;
pub mod auth;
pub mod bookings;

use axum::Json;
use serde_json::json;

/// Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
