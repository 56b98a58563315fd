//! Account REST API handlers
//!
//! Login, signup, logout, password change and the username availability
//! probe. Pages meant for anonymous callers send signed-in callers to their
//! profile instead.

use crate::{
    ActionResponse, ApiError, ApiResult, AppState, AuthPageResponse, ChangePasswordRequest,
    CheckUsernameQuery, FormValidator, LoginRequest, MaybeSession, NextQuery, Session,
    SessionResponse, SignupRequest, UsernameAvailabilityResponse, clear_session_cookie,
    local_path_or, session_cookie,
};

use tf_auth::{Claims, PasswordHasher};
use tf_core::{Identity, Profile};
use tf_db::{IdentityRepository, ProfileRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderName, StatusCode, header},
};
use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;

const INVALID_CREDENTIALS: &str = "Invalid username or password";
const DEFAULT_REDIRECT: &str = "/profile";

type WithCookie<T> = ([(HeaderName, String); 1], Json<T>);

// =============================================================================
// Handlers
// =============================================================================

/// GET /login
pub async fn login_page(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Query(query): Query<NextQuery>,
) -> ApiResult<Json<AuthPageResponse>> {
    auth_page(&state, session, query, "login")
}

/// GET /signup
pub async fn signup_page(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Query(query): Query<NextQuery>,
) -> ApiResult<Json<AuthPageResponse>> {
    auth_page(&state, session, query, "signup")
}

/// POST /login
///
/// Issues a session token as both cookie and body. `next` may come from the
/// body or the query string; the body wins.
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<WithCookie<SessionResponse>> {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation {
            message: "Please provide both username and password".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    state.login_limiter.check(username)?;

    let Some(mut identity) = IdentityRepository::find_by_username(&state.pool, username).await?
    else {
        log::info!("Login failed for unknown user {}", username);
        return Err(ApiError::unauthenticated(INVALID_CREDENTIALS));
    };

    if !verify_password(&req.password, &identity.password_hash).await? {
        log::info!("Login failed for {}: wrong password", identity.username);
        return Err(ApiError::unauthenticated(INVALID_CREDENTIALS));
    }
    if !identity.is_active {
        return Err(ApiError::unauthenticated("Your account has been deactivated"));
    }

    let now = Utc::now();
    IdentityRepository::record_login(&state.pool, identity.id, now).await?;
    identity.last_login = Some(now);

    let auth = &state.config.auth;
    let ttl_secs = if req.remember_me {
        auth.remember_me_ttl_secs
    } else {
        auth.session_ttl_secs
    };
    let ttl_secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX / 1000);

    let claims = Claims::new(identity.id, identity.token_version, now, Duration::seconds(ttl_secs));
    let token = state.token_issuer.issue(&claims)?;
    let cookie = session_cookie(&token, req.remember_me.then_some(ttl_secs), auth.cookie_secure);

    let next = req.next.as_deref().or(query.next.as_deref());
    let redirect_to = local_path_or(next, DEFAULT_REDIRECT);

    log::info!("{} logged in", identity.username);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse {
            token,
            expires_at: claims.exp,
            remember_me: req.remember_me,
            redirect_to,
            identity: identity.into(),
        }),
    ))
}

/// POST /signup
///
/// Every validation message is reported at once. Identity and profile are
/// created together or not at all.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<ActionResponse>)> {
    let limits = &state.config.validation;
    let username = req.username.trim();
    let email = req.email.trim();

    let mut form = FormValidator::new();
    if form.required(username, "username", "Username is required") {
        form.check(
            username.chars().count() >= limits.min_username_length,
            "username",
            format!(
                "Username must be at least {} characters long",
                limits.min_username_length
            ),
        );
        form.max_chars(username, limits.max_username_length, "username", "Username");
    }
    if form.required(email, "email", "Email is required") {
        form.check(email.contains('@'), "email", "Enter a valid email address");
    }
    if form.required(&req.password, "password", "Password is required") {
        form.check(
            req.password.chars().count() >= limits.min_password_length,
            "password",
            format!(
                "Password must be at least {} characters long",
                limits.min_password_length
            ),
        );
    }
    form.check(
        req.password == req.password2,
        "password2",
        "Passwords do not match",
    );
    form.finish()?;

    if IdentityRepository::username_exists(&state.pool, username).await? {
        return Err(ApiError::conflict("Username already exists"));
    }
    if IdentityRepository::email_taken(&state.pool, email, None).await? {
        return Err(ApiError::conflict("Email already exists"));
    }

    let password_hash = hash_password(&req.password).await?;
    let mut identity = Identity::new(username.to_string(), email.to_string(), password_hash);
    identity.first_name = req.first_name.as_deref().unwrap_or_default().trim().to_string();
    identity.last_name = req.last_name.as_deref().unwrap_or_default().trim().to_string();

    match create_account(&state.pool, &identity).await {
        Ok(()) => {}
        Err(e) if e.is_conflict() => {
            return Err(ApiError::conflict("Username or email already exists"));
        }
        Err(e) => {
            return Err(ApiError::internal(format!(
                "Account creation for {} failed: {}",
                identity.username, e
            )));
        }
    }

    log::info!("Created account {}", identity.username);

    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::ok(
            "Account created successfully! Please log in.",
            "/login",
        )),
    ))
}

/// POST /logout
///
/// Always succeeds, signed in or not.
pub async fn logout(State(state): State<AppState>) -> WithCookie<ActionResponse> {
    (
        [(
            header::SET_COOKIE,
            clear_session_cookie(state.config.auth.cookie_secure),
        )],
        Json(ActionResponse::ok("You have been logged out.", "/login")),
    )
}

/// POST /change-password
///
/// Success bumps the token version, which ends every existing session.
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<WithCookie<ActionResponse>> {
    let identity = session.identity;
    let min_length = state.config.validation.min_password_length;

    let current_ok = verify_password(&req.current_password, &identity.password_hash).await?;

    let mut form = FormValidator::new();
    form.check(
        current_ok,
        "current_password",
        "Current password is incorrect",
    );
    form.check(
        req.new_password1.chars().count() >= min_length,
        "new_password1",
        format!("New password must be at least {min_length} characters long"),
    );
    form.check(
        req.new_password1 == req.new_password2,
        "new_password2",
        "New passwords do not match",
    );
    form.finish()?;

    let password_hash = hash_password(&req.new_password1).await?;
    let version = IdentityRepository::update_password(&state.pool, identity.id, &password_hash)
        .await?
        .ok_or_else(|| ApiError::internal(format!("Identity {} vanished", identity.id)))?;

    log::info!(
        "{} changed password, token version now {}",
        identity.username,
        version
    );

    Ok((
        [(
            header::SET_COOKIE,
            clear_session_cookie(state.config.auth.cookie_secure),
        )],
        Json(ActionResponse::ok(
            "Your password was successfully updated! Please log in again.",
            "/login",
        )),
    ))
}

/// GET /check-username?username=
pub async fn check_username(
    State(state): State<AppState>,
    Query(query): Query<CheckUsernameQuery>,
) -> ApiResult<Json<UsernameAvailabilityResponse>> {
    let username = query.username.trim();
    let available =
        !username.is_empty() && !IdentityRepository::username_exists(&state.pool, username).await?;

    Ok(Json(UsernameAvailabilityResponse { available }))
}

// =============================================================================
// Helpers
// =============================================================================

fn auth_page(
    state: &AppState,
    session: Option<Session>,
    query: NextQuery,
    page: &'static str,
) -> ApiResult<Json<AuthPageResponse>> {
    if session.is_some() {
        return Err(ApiError::AlreadyAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(AuthPageResponse {
        page,
        next: local_path_or(query.next.as_deref(), DEFAULT_REDIRECT),
        min_password_length: state.config.validation.min_password_length,
    }))
}

async fn create_account(pool: &SqlitePool, identity: &Identity) -> tf_db::Result<()> {
    let mut tx = pool.begin().await?;
    IdentityRepository::create(&mut *tx, identity).await?;
    ProfileRepository::create(&mut *tx, &Profile::new(identity.id)).await?;
    tx.commit().await?;
    Ok(())
}

/// Hashing and verification run on the blocking pool
async fn hash_password(password: &str) -> ApiResult<String> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || PasswordHasher::new().hash(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Password hashing task failed: {e}")))?;
    Ok(hashed?)
}

async fn verify_password(password: &str, hash: &str) -> ApiResult<bool> {
    let (password, hash) = (password.to_string(), hash.to_string());
    let verified =
        tokio::task::spawn_blocking(move || PasswordHasher::new().verify(&password, &hash))
            .await
            .map_err(|e| ApiError::internal(format!("Password check task failed: {e}")))?;
    Ok(verified?)
}
