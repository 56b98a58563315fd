use crate::error::{Result as ServerErrorResult, ServerError};

use tf_auth::{JwtValidator, LoginRateLimiter, RateLimitConfig, TokenIssuer};
use tf_config::Config;
use tf_core::analytics::ReportingWindow;

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub token_issuer: Arc<TokenIssuer>,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Fails when no JWT secret is configured
    pub fn new(pool: SqlitePool, config: Config) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or(ServerError::MissingSetting {
                name: "auth.jwt_secret",
            })?;

        let login_limiter = LoginRateLimiter::new(RateLimitConfig {
            max_attempts: config.rate_limit.max_attempts,
            window_secs: config.rate_limit.window_secs,
        });

        Ok(Self {
            pool,
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
            token_issuer: Arc::new(TokenIssuer::with_hs256(secret.as_bytes())),
            login_limiter: Arc::new(login_limiter),
            config: Arc::new(config),
        })
    }

    /// Today plus the configured offset, taken from the wall clock
    pub fn reporting_window(&self) -> ReportingWindow {
        ReportingWindow::at(Utc::now(), self.config.dashboard.utc_offset())
    }
}
