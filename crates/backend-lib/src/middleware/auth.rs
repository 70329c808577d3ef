// ============================
// roombooker-backend-lib/src/middleware/auth.rs
// ============================
//! Session middleware and the admin gate.
use crate::{error::AppError, AppState};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use roombooker_common::Role;
use std::sync::Arc;

/// Scheme prefix stripped from header-carried tokens
const BEARER_PREFIX: &str = "Bearer ";

/// The identity resolved for the current request.
///
/// Carried in the request extensions, so it is scoped to one request
/// and cannot leak across concurrent ones. Handlers take it as an
/// extractor parameter rather than digging through an untyped context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthenticated)
    }
}

/// Locate the session token: explicit Authorization header first,
/// then the named cookie.
fn token_from_request(request: &Request, cookie_name: &str) -> Option<String> {
    if let Some(value) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    let cookies = request.headers().get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').map(str::trim).find_map(|pair| {
        let value = pair.strip_prefix(cookie_name)?.strip_prefix('=')?;
        Some(value.to_string())
    })
}

/// Session middleware: resolve the request's identity or reject it
/// before it reaches any store operation.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = token_from_request(&request, &state.settings.auth_cookie)
        .ok_or(AppError::Unauthenticated)?;
    let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(&token);

    // Expired and malformed tokens are deliberately indistinguishable
    // to the caller
    let user_id = state
        .tokens
        .validate(token)
        .map_err(|_| AppError::Unauthenticated)?;

    request.extensions_mut().insert(CurrentUser { user_id });
    Ok(next.run(request).await)
}

/// Admin gate, composed on top of `require_auth`: requires a resolved
/// identity whose stored role is admin.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let current = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthenticated)?;

    let role = state.credentials.role_of(&current.user_id).await?;
    if role != Role::Admin {
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}
