// ============================
// roombooker-backend-lib/src/handlers/admin.rs
// ============================
//! Admin-gated user management.
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use roombooker_common::{UpdateRoleRequest, UserInfo};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// List every user known to the credential store
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserInfo>>, AppError> {
    Ok(Json(state.credentials.list_users().await?))
}

/// Change a user's stored role
pub async fn update_user_role(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.credentials.update_role(&id, payload.role).await?;

    info!(user_id = %id, role = payload.role.as_str(), "role updated");
    Ok(Json(json!({ "id": id, "role": payload.role })))
}
