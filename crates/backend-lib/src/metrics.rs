// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for Prometheus metric keys
pub const USER_REGISTERED: &str = "auth.user_registered";
pub const LOGIN_OK: &str = "auth.login_ok";
pub const LOGIN_REJECTED: &str = "auth.login_rejected";
pub const BOOKING_CREATED: &str = "booking.created";
pub const BOOKING_QUERIED: &str = "booking.queried";
pub const TIMESTAMP_DEGRADED: &str = "booking.timestamp_degraded";
