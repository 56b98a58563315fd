use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,
    /// Identity token version at issue time
    pub ver: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    pub fn new(identity_id: Uuid, token_version: i64, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: identity_id.to_string(),
            ver: token_version,
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (identity id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.ver < 0 {
            return Err(AuthError::InvalidClaim {
                claim: "ver".to_string(),
                message: "token version cannot be negative".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.identity_id().map(|_| ())
    }

    #[track_caller]
    pub fn identity_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a UUID: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Reject tokens issued before the identity's current version
    #[track_caller]
    pub fn ensure_current(&self, token_version: i64) -> AuthErrorResult<()> {
        if self.ver == token_version {
            Ok(())
        } else {
            Err(AuthError::TokenRevoked {
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
