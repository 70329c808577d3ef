// ============================
// roombooker-backend-lib/src/handlers/auth.rs
// ============================
//! Registration, login, logout, and the current-user view.
use crate::auth::hash_password_secure;
use crate::config::Settings;
use crate::error::AppError;
use crate::metrics::{LOGIN_OK, LOGIN_REJECTED, USER_REGISTERED};
use crate::middleware::CurrentUser;
use crate::validation::{validate_email, validate_password};
use crate::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use metrics::counter;
use roombooker_common::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role, UserInfo,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Session cookie carrying the token: HTTP-only, SameSite=Lax, and a
/// lifetime matching the token's own expiry.
fn session_cookie(settings: &Settings, token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        settings.auth_cookie, token, settings.token_ttl_secs
    )
}

fn expired_cookie(settings: &Settings) -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        settings.auth_cookie
    )
}

/// Create a local account and log it in immediately
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_email(&payload.email)?;
    validate_password(&payload.password, state.settings.min_password_length)?;

    let hash = hash_password_secure(&mut payload.password)?;
    let id = state
        .credentials
        .create_user(&payload.email, &payload.display_name, Role::User, &hash)
        .await?;

    let token = state
        .tokens
        .issue(&id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    counter!(USER_REGISTERED).increment(1);
    info!(user_id = %id, "user registered");

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, session_cookie(&state.settings, &token))],
        Json(RegisterResponse {
            id,
            email: payload.email,
        }),
    ))
}

/// Authenticate a local account and issue a session token
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (id, role) = match state
        .credentials
        .verify_credentials(&payload.email, &payload.password)
        .await
    {
        Ok(identity) => identity,
        Err(err) => {
            counter!(LOGIN_REJECTED).increment(1);
            return Err(err);
        },
    };

    let token = state
        .tokens
        .issue(&id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    counter!(LOGIN_OK).increment(1);
    info!(user_id = %id, "login");

    Ok((
        [(header::SET_COOKIE, session_cookie(&state.settings, &token))],
        Json(LoginResponse { id, role }),
    ))
}

/// Clear the session cookie. The token itself stays valid until its
/// natural expiry; there is no server-side revocation.
pub async fn logout(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::SET_COOKIE, expired_cookie(&state.settings))],
        Json(json!({ "message": "Logged out successfully" })),
    )
}

/// Public view of the authenticated user
pub async fn me(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<Json<UserInfo>, AppError> {
    let info = state
        .credentials
        .find_user(&user.user_id)
        .await?
        .ok_or(AppError::Unauthenticated)?;
    Ok(Json(info))
}
