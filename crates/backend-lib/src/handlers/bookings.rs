// ============================
// roombooker-backend-lib/src/handlers/bookings.rs
// ============================
//! Booking operations, gated by the session middleware.
use crate::booking::timeparse::normalize_timestamp;
use crate::error::AppError;
use crate::metrics::{BOOKING_QUERIED, TIMESTAMP_DEGRADED};
use crate::middleware::CurrentUser;
use crate::validation::validate_booking_payload;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use metrics::counter;
use roombooker_common::{Booking, BookingTime, CreateBookingRequest, Role, UpdateBookingRequest};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Optional half-open range bounds for the room view
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Parse an RFC 3339 query bound; unparseable input is treated as
/// absent, so the query falls back to returning everything
fn parse_bound(raw: Option<&String>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .ok()
}

/// Normalize a client-supplied timestamp, counting degradations
fn normalize(raw: &str, state: &AppState) -> BookingTime {
    let time = normalize_timestamp(raw, &state.settings.time_formats);
    if !time.is_filterable() {
        counter!(TIMESTAMP_DEGRADED).increment(1);
    }
    time
}

/// Owner-or-admin check shared by the mutating operations
async fn may_modify(state: &AppState, user: &CurrentUser, booking: &Booking) -> Result<(), AppError> {
    if booking.owner_user_id == user.user_id {
        return Ok(());
    }
    if state.credentials.role_of(&user.user_id).await? == Role::Admin {
        return Ok(());
    }
    Err(AppError::Forbidden)
}

/// Create a booking owned by the authenticated user
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_booking_payload(&payload)?;

    let start = normalize(&payload.start_time, &state);
    let end = normalize(&payload.end_time, &state);

    let booking = state.bookings.create(
        &payload.room_id,
        &payload.title,
        start,
        end,
        &user.user_id,
    )?;

    info!(booking_id = %booking.id, room_id = %booking.room_id, "booking created");
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Every booking for a room that overlaps the `[from, to)` query range;
/// no bounds returns the room's bookings unfiltered
pub async fn room_bookings(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Query(range): Query<RangeQuery>,
) -> Json<Vec<Booking>> {
    let from = parse_bound(range.from.as_ref());
    let to = parse_bound(range.to.as_ref());

    counter!(BOOKING_QUERIED).increment(1);
    Json(state.bookings.query_range(&room_id, from, to))
}

/// Fetch one booking by ID
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    state
        .bookings
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

/// Replace a booking's title and slot; owner or admin only
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    let existing = state
        .bookings
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;
    may_modify(&state, &user, &existing).await?;

    if payload.title.is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }

    let start = normalize(&payload.start_time, &state);
    let end = normalize(&payload.end_time, &state);

    let updated = state
        .bookings
        .replace(&id, &payload.title, start, end)?
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    info!(booking_id = %id, "booking updated");
    Ok(Json(updated))
}

/// Remove a booking; owner or admin only
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .bookings
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;
    may_modify(&state, &user, &existing).await?;

    state
        .bookings
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    info!(booking_id = %id, "booking deleted");
    Ok(Json(json!({ "message": format!("Booking {id} deleted") })))
}
