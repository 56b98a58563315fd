pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod login_rate_limiter;
pub mod password_hasher;
pub mod rate_limit_config;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use login_rate_limiter::{LoginRateLimiter, PRUNE_THRESHOLD};
pub use password_hasher::PasswordHasher;
pub use rate_limit_config::RateLimitConfig;
pub use token_issuer::TokenIssuer;
