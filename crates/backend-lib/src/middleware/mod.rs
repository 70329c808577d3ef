// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the roombooker server.

pub mod auth;

pub use auth::{require_admin, require_auth, CurrentUser};

#[cfg(test)]
mod tests;
