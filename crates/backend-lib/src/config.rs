// ============================
// roombooker-backend-lib/src/config.rs
// ============================
//! Configuration management.
use crate::booking::OverlapPolicy;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default session token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60 * 24;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level
    pub log_level: String,
    /// Secret used to sign session tokens; rotating it invalidates every
    /// outstanding token at once
    pub jwt_secret: String,
    /// Session token lifetime in seconds
    pub token_ttl_secs: u64,
    /// Name of the cookie carrying the session token
    pub auth_cookie: String,
    /// Allow-list of zone-less timestamp layouts accepted at the booking
    /// ingestion boundary (RFC 3339 is always tried first)
    pub time_formats: Vec<String>,
    /// Whether creates that overlap an existing booking are rejected
    pub overlap_policy: OverlapPolicy,
    /// Minimum accepted password length at registration
    pub min_password_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("valid default addr"),
            log_level: "info".to_string(),
            jwt_secret: "change-me-dev-secret".to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            auth_cookie: "auth_token".to_string(),
            time_formats: vec![
                "%Y-%m-%dT%H:%M".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
            ],
            overlap_policy: OverlapPolicy::Reject,
            min_password_length: 8,
        }
    }
}

/// Load settings from `config.toml` and `ROOMBOOKER_`-prefixed
/// environment variables, on top of the built-in defaults
pub fn load_settings() -> Result<Settings> {
    let settings = Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("ROOMBOOKER_"))
        .extract()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.token_ttl_secs, 60 * 60 * 24);
        assert_eq!(settings.auth_cookie, "auth_token");
        assert_eq!(settings.overlap_policy, OverlapPolicy::Reject);
        assert_eq!(settings.time_formats.len(), 3);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let figment = Figment::from(Serialized::defaults(Settings::default())).merge(
            Toml::string(
                r#"
                bind_addr = "0.0.0.0:9000"
                jwt_secret = "from-toml"
                overlap_policy = "allow"
            "#,
            ),
        );
        let settings: Settings = figment.extract().unwrap();

        assert_eq!(settings.bind_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(settings.jwt_secret, "from-toml");
        assert_eq!(settings.overlap_policy, OverlapPolicy::Allow);
        // untouched fields keep their defaults
        assert_eq!(settings.auth_cookie, "auth_token");
    }
}
