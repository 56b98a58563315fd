//! Axum extractors resolving the caller's session

use crate::{ApiError, ApiResult, AppState, token_from_headers};

use tf_auth::Claims;
use tf_core::Identity;
use tf_db::IdentityRepository;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use error_location::ErrorLocation;

/// An authenticated caller. Rejects with a redirect to the login page,
/// carrying the requested path as `next`.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
    pub claims: Claims,
}

/// The session when one is present; never rejects for lack of one
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match authenticate(&parts.headers, state).await? {
                Some(session) => Ok(session),
                None => {
                    let next = parts
                        .uri
                        .path_and_query()
                        .map(|pq| pq.as_str().to_string())
                        .unwrap_or_else(|| parts.uri.path().to_string());
                    Err(ApiError::LoginRequired {
                        next,
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }
}

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { authenticate(&parts.headers, state).await.map(MaybeSession) }
    }
}

/// Resolves the request's token to an active identity whose token version
/// still matches. Anything short of that is "no session"; only storage
/// failures are errors.
pub async fn authenticate(headers: &HeaderMap, state: &AppState) -> ApiResult<Option<Session>> {
    let Some(token) = token_from_headers(headers) else {
        return Ok(None);
    };

    let claims = match state.jwt_validator.validate(&token) {
        Ok(claims) => claims,
        Err(e) => {
            log::debug!("Rejected session token: {}", e);
            return Ok(None);
        }
    };
    let Ok(identity_id) = claims.identity_id() else {
        return Ok(None);
    };

    let Some(identity) = IdentityRepository::find_by_id(&state.pool, identity_id).await? else {
        log::debug!("Session for unknown identity {}", identity_id);
        return Ok(None);
    };
    if !identity.is_active {
        log::debug!("Session for deactivated identity {}", identity.username);
        return Ok(None);
    }
    if let Err(e) = claims.ensure_current(identity.token_version) {
        log::debug!("Stale session for {}: {}", identity.username, e);
        return Ok(None);
    }

    Ok(Some(Session { identity, claims }))
}
