//! Profile REST API handlers
//!
//! Both handlers take a bare session rather than `CurrentProfile`: this is the
//! page that creates a missing profile.

use crate::{
    ApiError, ApiResult, AppState, Choice, FormValidator, ProfileResponse, Session,
    UpdateProfileRequest, non_blank,
};

use tf_core::{Identity, Profile, Theme};
use tf_db::{IdentityRepository, ProfileRepository};

use std::str::FromStr;

use axum::{Json, extract::State};
use chrono::Utc;

// =============================================================================
// Handlers
// =============================================================================

/// GET /profile
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ensure_profile(&state, &session.identity).await?;

    Ok(Json(profile_response(session.identity, profile, None)))
}

/// POST /profile
///
/// Updates identity names and email together with the profile fields, in one
/// transaction.
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let limits = &state.config.validation;
    let mut identity = session.identity;
    let mut profile = ensure_profile(&state, &identity).await?;

    let mut form = FormValidator::new();
    if let Some(email) = req.email.as_deref().map(str::trim)
        && form.required(email, "email", "Email is required")
        && form.check(email.contains('@'), "email", "Enter a valid email address")
    {
        identity.email = email.to_string();
    }
    if let Some(bio) = &req.bio
        && form.max_chars(bio, limits.max_bio_length, "bio", "Bio")
    {
        profile.bio = bio.trim().to_string();
    }
    if let Some(phone) = &req.phone
        && form.max_chars(phone, limits.max_phone_length, "phone", "Phone")
    {
        profile.phone = phone.trim().to_string();
    }
    if let Some(location) = &req.location
        && form.max_chars(location, limits.max_location_length, "location", "Location")
    {
        profile.location = location.trim().to_string();
    }
    form.finish()?;

    if let Some(theme) = req.theme.as_deref() {
        profile.theme = Theme::from_str(theme.trim())?;
    }
    if let Some(first_name) = &req.first_name {
        identity.first_name = first_name.trim().to_string();
    }
    if let Some(last_name) = &req.last_name {
        identity.last_name = last_name.trim().to_string();
    }
    if let Some(avatar) = &req.avatar {
        profile.avatar = non_blank(Some(avatar));
    }
    if let Some(notify) = req.email_notifications {
        profile.email_notifications = notify;
    }

    if IdentityRepository::email_taken(&state.pool, &identity.email, Some(identity.id)).await? {
        return Err(ApiError::conflict("Email already exists"));
    }

    profile.updated_at = Utc::now();

    let mut tx = state.pool.begin().await?;
    IdentityRepository::update_details(&mut *tx, &identity).await?;
    ProfileRepository::update(&mut *tx, &profile).await?;
    tx.commit().await?;

    log::debug!("Updated profile of {}", identity.username);

    Ok(Json(profile_response(
        identity,
        profile,
        Some("Your profile was successfully updated!".to_string()),
    )))
}

// =============================================================================
// Helpers
// =============================================================================

/// The caller's profile, created on first visit. A concurrent creation
/// surfaces as a conflict and counts as success.
async fn ensure_profile(state: &AppState, identity: &Identity) -> ApiResult<Profile> {
    if let Some(profile) = ProfileRepository::find_by_identity(&state.pool, identity.id).await? {
        return Ok(profile);
    }

    match ProfileRepository::create(&state.pool, &Profile::new(identity.id)).await {
        Ok(()) => log::info!("Created missing profile for {}", identity.username),
        Err(e) if e.is_conflict() => {}
        Err(e) => return Err(e.into()),
    }

    ProfileRepository::find_by_identity(&state.pool, identity.id)
        .await?
        .ok_or_else(|| ApiError::internal(format!("Profile of {} not readable", identity.id)))
}

fn profile_response(identity: Identity, profile: Profile, message: Option<String>) -> ProfileResponse {
    ProfileResponse {
        identity: identity.into(),
        profile: profile.into(),
        theme_choices: Choice::themes(),
        message,
    }
}
