#![allow(dead_code)]

//! Test infrastructure for tf-server API tests

use tf_auth::{Claims, PasswordHasher};
use tf_config::Config;
use tf_core::{Identity, Profile};
use tf_db::{IdentityRepository, ProfileRepository};
use tf_server::{AppState, SESSION_COOKIE, build_router};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-that-is-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "correct horse battery";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    // One connection, or each checkout sees a different empty database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    tf_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    config
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await, test_config()).expect("Failed to build app state")
}

/// A signed-in account
pub struct TestUser {
    pub identity: Identity,
    pub profile: Option<Profile>,
    /// `Cookie` header value carrying the session
    pub cookie: String,
}

/// Inserts an identity with `TEST_PASSWORD`, optionally its profile, and issues a session
pub async fn create_test_user(state: &AppState, username: &str, with_profile: bool) -> TestUser {
    let hash = PasswordHasher::new()
        .hash(TEST_PASSWORD)
        .expect("Failed to hash password");
    let identity = Identity::new(
        username.to_string(),
        format!("{username}@example.com"),
        hash,
    );
    IdentityRepository::create(&state.pool, &identity)
        .await
        .expect("Failed to create identity");

    let profile = if with_profile {
        let profile = Profile::new(identity.id);
        ProfileRepository::create(&state.pool, &profile)
            .await
            .expect("Failed to create profile");
        Some(profile)
    } else {
        None
    };

    let claims = Claims::new(
        identity.id,
        identity.token_version,
        Utc::now(),
        Duration::hours(1),
    );
    let token = state.token_issuer.issue(&claims).expect("Failed to issue token");

    TestUser {
        identity,
        profile,
        cookie: format!("{SESSION_COOKIE}={token}"),
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }
}

/// Sends one request through a fresh router
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let app: Router = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

pub async fn get(state: &AppState, uri: &str, user: &TestUser) -> TestResponse {
    send(state, "GET", uri, Some(&user.cookie), None).await
}

pub async fn post(state: &AppState, uri: &str, user: &TestUser, body: Value) -> TestResponse {
    send(state, "POST", uri, Some(&user.cookie), Some(body)).await
}
