mod auth_config;
mod config;
mod dashboard_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use auth_config::{
    AuthConfig, DEFAULT_REMEMBER_ME_TTL_SECS, DEFAULT_SESSION_TTL_SECS, MIN_JWT_SECRET_LENGTH,
};
pub use config::Config;
pub use dashboard_config::{CalendarStart, DashboardConfig};
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "taskflow.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 8;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 64;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "TF_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".tf";
const CONFIG_FILE_NAME: &str = "config.toml";
