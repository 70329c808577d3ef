// ============================
// roombooker-backend-lib/src/lib.rs
// ============================
//! Core backend functionality for the roombooker server.

pub mod auth;
pub mod booking;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod validation;

use crate::auth::{CredentialStore, InMemoryCredentials, TokenService};
use crate::booking::BookingStore;
use crate::config::Settings;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Settings the state was built from
    pub settings: Arc<Settings>,
    /// Session token service
    pub tokens: TokenService,
    /// Credential store collaborator
    pub credentials: Arc<dyn CredentialStore>,
    /// In-memory booking store
    pub bookings: BookingStore,
}

impl AppState {
    /// Create application state over an in-memory credential store
    pub fn new(settings: Settings) -> Self {
        Self::with_credentials(settings, Arc::new(InMemoryCredentials::new()))
    }

    /// Create application state over a caller-supplied credential store
    pub fn with_credentials(settings: Settings, credentials: Arc<dyn CredentialStore>) -> Self {
        let tokens = TokenService::new(&settings.jwt_secret, settings.token_ttl_secs);
        let bookings = BookingStore::new(settings.overlap_policy);

        Self {
            settings: Arc::new(settings),
            tokens,
            credentials,
            bookings,
        }
    }
}
