use crate::{AuthError, Claims, Result as AuthErrorResult};

use tf_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies session tokens signed with the shared HS256 secret
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30; // clock skew tolerance, seconds
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate signature, expiry and claim shape
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let caller = Location::caller();
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(caller),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(caller),
                },
            }
        })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    pub fn algorithm(&self) -> &str {
        "HS256"
    }
}
