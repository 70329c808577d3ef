// ============================
// roombooker-backend-lib/src/router.rs
// ============================
//! Route table and middleware wiring.
use crate::handlers::{self, admin, auth, bookings};
use crate::middleware::{require_admin, require_auth};
use crate::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// Everything under the protected group passes the session middleware
/// before any handler or store operation runs; the admin subtree adds
/// the role gate on top.
pub fn create_router(state: Arc<AppState>) -> Router {
    let admin_routes = Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/role", patch(admin::update_user_role))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    let api_routes = Router::new()
        .route("/rooms/{id}/bookings", get(bookings::room_bookings))
        .route("/bookings", post(bookings::create_booking))
        .route(
            "/bookings/{id}",
            get(bookings::get_booking)
                .patch(bookings::update_booking)
                .delete(bookings::delete_booking),
        )
        .nest("/admin", admin_routes);

    let protected = Router::new()
        .route("/me", get(auth::me))
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
