use crate::{AuthError, Claims, Result as AuthErrorResult};

use tf_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs session tokens; pairs with [`crate::JwtValidator`] over the same secret
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
        }
    }

    #[track_caller]
    pub fn issue(&self, claims: &Claims) -> AuthErrorResult<String> {
        let caller = Location::caller();
        encode(&self.header, claims, &self.encoding_key).map_err(|source| AuthError::JwtEncode {
            source,
            location: ErrorLocation::from(caller),
        })
    }
}
