use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;

pub const MIN_SESSION_TTL_SECS: u64 = 60;
pub const MAX_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 90;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24;
pub const DEFAULT_REMEMBER_ME_TTL_SECS: u64 = 60 * 60 * 24 * 14;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; usually supplied via TF_AUTH_JWT_SECRET.
    pub jwt_secret: Option<String>,
    /// Lifetime of a session without "remember me"
    pub session_ttl_secs: u64,
    /// Lifetime of a "remember me" session
    pub remember_me_ttl_secs: u64,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            remember_me_ttl_secs: DEFAULT_REMEMBER_ME_TTL_SECS,
            cookie_secure: false,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set TF_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_LENGTH,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        for (name, value) in [
            ("session_ttl_secs", self.session_ttl_secs),
            ("remember_me_ttl_secs", self.remember_me_ttl_secs),
        ] {
            if !(MIN_SESSION_TTL_SECS..=MAX_SESSION_TTL_SECS).contains(&value) {
                return Err(ConfigError::auth(format!(
                    "auth.{} must be {}-{}, got {}",
                    name, MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, value
                )));
            }
        }

        Ok(())
    }
}
