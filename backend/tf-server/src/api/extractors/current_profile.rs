use crate::{ApiError, AppState, Session};

use tf_core::{Identity, Profile};
use tf_db::ProfileRepository;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Session plus the caller's profile. Callers without a profile are sent to
/// the profile page, which creates one.
#[derive(Debug, Clone)]
pub struct CurrentProfile {
    pub identity: Identity,
    pub profile: Profile,
}

impl FromRequestParts<AppState> for CurrentProfile {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Session { identity, .. } = Session::from_request_parts(parts, state).await?;

            match ProfileRepository::find_by_identity(&state.pool, identity.id).await? {
                Some(profile) => Ok(CurrentProfile { identity, profile }),
                None => {
                    log::debug!("{} has no profile yet", identity.username);
                    Err(ApiError::ProfileRequired {
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }
}
