// ============================
// roombooker-backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod credentials;
pub mod password;
pub mod token;

pub use credentials::{CredentialRecord, CredentialStore, InMemoryCredentials};
pub use password::{hash_password, hash_password_secure, verify_password};
pub use token::{TokenError, TokenService};
