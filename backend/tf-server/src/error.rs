use thiserror::Error;

/// Startup failures; request-time failures are `ApiError`
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tf_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] tf_db::DbError),

    #[error("Missing setting: {name}")]
    MissingSetting { name: &'static str },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
