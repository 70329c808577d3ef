use super::auth::*;
use crate::auth::{hash_password, CredentialStore};
use crate::config::Settings;
use crate::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use roombooker_common::Role;
use std::sync::Arc;
use tower::ServiceExt;

async fn whoami(user: CurrentUser) -> String {
    user.user_id
}

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(Settings::default()))
}

/// Router with only the session middleware applied
fn protected_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .layer(axum_middleware::from_fn_with_state(state, require_auth))
}

/// Router with the admin gate composed on top of the session middleware
fn admin_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin", get(|| async { "ok" }))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ))
        .layer(axum_middleware::from_fn_with_state(state, require_auth))
}

async fn seed_user(state: &AppState, email: &str, role: Role) -> String {
    let hash = hash_password("a-sufficient-password").unwrap();
    state
        .credentials
        .create_user(email, "Seeded", role, &hash)
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = protected_app(test_state());

    let response = app
        .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = protected_app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bearer_header_token_resolves_identity() {
    let state = test_state();
    let token = state.tokens.issue("user-42").unwrap();
    let app = protected_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "user-42");
}

#[tokio::test]
async fn test_raw_header_token_works_without_scheme_prefix() {
    let state = test_state();
    let token = state.tokens.issue("user-42").unwrap();
    let app = protected_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cookie_fallback_resolves_identity() {
    let state = test_state();
    let token = state.tokens.issue("user-42").unwrap();
    let app = protected_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("cookie", format!("other=1; auth_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "user-42");
}

#[tokio::test]
async fn test_header_takes_priority_over_cookie() {
    let state = test_state();
    let header_token = state.tokens.issue("header-user").unwrap();
    let cookie_token = state.tokens.issue("cookie-user").unwrap();
    let app = protected_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", format!("Bearer {header_token}"))
                .header("cookie", format!("auth_token={cookie_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_string(response).await, "header-user");
}

#[tokio::test]
async fn test_identity_binding_is_per_request() {
    let state = test_state();
    let token_a = state.tokens.issue("user-a").unwrap();
    let token_b = state.tokens.issue("user-b").unwrap();
    let app = protected_app(state);

    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", format!("Bearer {token_a}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let second = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", format!("Bearer {token_b}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_string(first).await, "user-a");
    assert_eq!(body_string(second).await, "user-b");
}

#[tokio::test]
async fn test_admin_gate_checks_the_stored_role() {
    let state = test_state();
    let user_id = seed_user(&state, "user@example.com", Role::User).await;
    let admin_id = seed_user(&state, "admin@example.com", Role::Admin).await;
    let user_token = state.tokens.issue(&user_id).unwrap();
    let admin_token = state.tokens.issue(&admin_id).unwrap();
    let app = admin_app(state);

    // authenticated but insufficient role
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header("authorization", format!("Bearer {user_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // admin role passes
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header("authorization", format!("Bearer {admin_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // unauthenticated never reaches the role check
    let response = app
        .oneshot(Request::builder().uri("/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
