// ============================
// roombooker-backend-lib/src/auth/credentials.rs
// ============================
//! Credential store collaborator boundary.
//!
//! The core only needs `verify_credentials` and the role lookup used by
//! the admin gate; how the records are persisted is the collaborator's
//! concern. The in-memory implementation backs the dev server and the
//! tests.
use crate::auth::password::verify_password;
use crate::error::AppError;
use async_trait::async_trait;
use parking_lot::RwLock;
use roombooker_common::{Role, UserInfo};
use std::collections::HashMap;
use uuid::Uuid;

/// A stored credential record
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub password_hash: String,
}

/// Trait for credential store backends
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new user and return the generated ID
    async fn create_user(
        &self,
        email: &str,
        display_name: &str,
        role: Role,
        password_hash: &str,
    ) -> Result<String, AppError>;

    /// Verify an email/password pair.
    ///
    /// Fails with `InvalidCredentials` on any mismatch; a missing user
    /// and a wrong password are externally indistinguishable.
    async fn verify_credentials(&self, email: &str, password: &str)
        -> Result<(String, Role), AppError>;

    /// Look up the stored role for an identity
    async fn role_of(&self, user_id: &str) -> Result<Role, AppError>;

    /// Fetch the public view of a user, if present
    async fn find_user(&self, user_id: &str) -> Result<Option<UserInfo>, AppError>;

    /// List all users
    async fn list_users(&self) -> Result<Vec<UserInfo>, AppError>;

    /// Change a user's role
    async fn update_role(&self, user_id: &str, role: Role) -> Result<(), AppError>;
}

/// In-memory implementation of the CredentialStore trait, keyed by email
#[derive(Default)]
pub struct InMemoryCredentials {
    records: RwLock<HashMap<String, CredentialRecord>>,
}

impl InMemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_user_info(record: &CredentialRecord) -> UserInfo {
    UserInfo {
        id: record.id.clone(),
        email: record.email.clone(),
        display_name: record.display_name.clone(),
        role: record.role,
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentials {
    async fn create_user(
        &self,
        email: &str,
        display_name: &str,
        role: Role,
        password_hash: &str,
    ) -> Result<String, AppError> {
        let mut records = self.records.write();
        if records.contains_key(email) {
            return Err(AppError::Validation("email already registered".to_string()));
        }

        let id = Uuid::new_v4().to_string();
        records.insert(
            email.to_string(),
            CredentialRecord {
                id: id.clone(),
                email: email.to_string(),
                display_name: display_name.to_string(),
                role,
                password_hash: password_hash.to_string(),
            },
        );
        Ok(id)
    }

    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, Role), AppError> {
        let records = self.records.read();
        let record = records.get(email).ok_or(AppError::InvalidCredentials)?;
        if record.password_hash.is_empty() {
            return Err(AppError::InvalidCredentials);
        }
        if !verify_password(&record.password_hash, password) {
            return Err(AppError::InvalidCredentials);
        }
        Ok((record.id.clone(), record.role))
    }

    async fn role_of(&self, user_id: &str) -> Result<Role, AppError> {
        let records = self.records.read();
        records
            .values()
            .find(|r| r.id == user_id)
            .map(|r| r.role)
            .ok_or(AppError::Unauthenticated)
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<UserInfo>, AppError> {
        let records = self.records.read();
        Ok(records.values().find(|r| r.id == user_id).map(to_user_info))
    }

    async fn list_users(&self) -> Result<Vec<UserInfo>, AppError> {
        let records = self.records.read();
        let mut users: Vec<UserInfo> = records.values().map(to_user_info).collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn update_role(&self, user_id: &str, role: Role) -> Result<(), AppError> {
        let mut records = self.records.write();
        let record = records
            .values_mut()
            .find(|r| r.id == user_id)
            .ok_or_else(|| AppError::Validation("no such user".to_string()))?;
        record.role = role;
        Ok(())
    }
}
