// ============================
// roombooker-backend-lib/src/auth/token.rs
// ============================
//! Stateless session tokens.
//!
//! Tokens are self-contained HS256 JWTs carrying the subject identity
//! and an absolute expiry. Nothing is kept server-side, so validity is
//! purely signature + expiry; there is no revocation before natural
//! expiry, and rotating the signing secret invalidates every
//! outstanding token at once.
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token validation failure. Deliberately coarse: callers never see
/// partial claims or which check failed beyond expiry-vs-everything-else.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Claims embedded in a session token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject identity (user ID)
    sub: String,
    /// Issued-at, seconds since epoch
    iat: i64,
    /// Absolute expiry, seconds since epoch
    exp: i64,
}

/// Issues and validates signed session tokens
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service over a server-held secret
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Issue a token for `subject`, expiring `ttl` from now
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Invalid)
    }

    /// Validate signature and expiry, returning the subject identity
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        Ok(data.claims.sub)
    }
}
