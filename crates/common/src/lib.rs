// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the roombooker server and its clients.
//! This module defines the booking domain types and the HTTP request
//! and response payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role attached to an identity. Stored with the credential record and
/// checked by the admin gate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// A booking timestamp. Normalized to UTC when the client-supplied value
/// matched one of the accepted formats; otherwise the original raw string
/// is kept and the booking is not time-filterable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BookingTime {
    Utc(DateTime<Utc>),
    Raw(String),
}

impl BookingTime {
    /// The UTC instant, or `None` for a raw (not time-filterable) value.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            BookingTime::Utc(t) => Some(*t),
            BookingTime::Raw(_) => None,
        }
    }

    /// Whether this timestamp can participate in range filtering.
    pub fn is_filterable(&self) -> bool {
        matches!(self, BookingTime::Utc(_))
    }
}

/// A confirmed booking of a room for a time slot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Booking {
    /// Globally unique booking ID
    pub id: String,
    /// Room this booking belongs to
    pub room_id: String,
    /// Human-readable title
    pub title: String,
    /// Slot start
    pub start: BookingTime,
    /// Slot end
    pub end: BookingTime,
    /// Identity that created the booking
    pub owner_user_id: String,
}

/// Payload for creating a booking
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateBookingRequest {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub room_id: String,
}

/// Payload for replacing a booking's mutable fields
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateBookingRequest {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
}

/// Payload for local-account registration
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    pub password: String,
}

/// Payload for local-account login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub id: String,
    pub role: Role,
}

/// Response to a successful registration
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterResponse {
    pub id: String,
    pub email: String,
}

/// Public view of a user record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

/// Payload for the admin role-change operation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateRoleRequest {
    pub role: Role,
}
