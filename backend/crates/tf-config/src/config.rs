use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, DashboardConfig, DatabaseConfig, LoggingConfig, RateLimitConfig,
    ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. TF_CONFIG_DIR if set, else ./.tf/
    /// 2. Create the config directory if missing
    /// 3. Parse config.toml if present, else defaults
    /// 4. Apply TF_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: TF_CONFIG_DIR env var > ./.tf/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate every section. Call after load() so bad settings fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;
        self.validation.validate()?;
        self.dashboard.validate()?;

        if let Some(file) = &self.logging.file
            && (file.trim().is_empty() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name",
            ));
        }

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 secret {}, session={}s, remember_me={}s, secure_cookie={}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.session_ttl_secs,
            self.auth.remember_me_ttl_secs,
            self.auth.cookie_secure
        );
        info!(
            "  rate_limit: {} login attempts/{}s",
            self.rate_limit.max_attempts, self.rate_limit.window_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  validation: title={}, desc={}, password>={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.min_password_length
        );
        info!(
            "  dashboard: recent={}, heatmap={}d, velocity={}w, offset={}m",
            self.dashboard.recent_tasks,
            self.dashboard.heatmap_days,
            self.dashboard.velocity_weeks,
            self.dashboard.utc_offset_minutes
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TF_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TF_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("TF_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("TF_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TF_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("TF_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("TF_AUTH_SESSION_TTL_SECS", &mut self.auth.session_ttl_secs);
        Self::apply_env_parse(
            "TF_AUTH_REMEMBER_ME_TTL_SECS",
            &mut self.auth.remember_me_ttl_secs,
        );
        Self::apply_env_bool("TF_AUTH_COOKIE_SECURE", &mut self.auth.cookie_secure);

        // Rate limit
        Self::apply_env_parse(
            "TF_RATE_LIMIT_MAX_ATTEMPTS",
            &mut self.rate_limit.max_attempts,
        );
        Self::apply_env_parse(
            "TF_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Logging
        Self::apply_env_parse("TF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TF_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("TF_LOG_DIR", &mut self.logging.dir);

        // Validation
        Self::apply_env_parse(
            "TF_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );
        Self::apply_env_parse(
            "TF_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "TF_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );

        // Dashboard
        Self::apply_env_parse(
            "TF_DASHBOARD_RECENT_TASKS",
            &mut self.dashboard.recent_tasks,
        );
        Self::apply_env_parse(
            "TF_DASHBOARD_HIGH_PRIORITY_TASKS",
            &mut self.dashboard.high_priority_tasks,
        );
        Self::apply_env_parse(
            "TF_DASHBOARD_HEATMAP_DAYS",
            &mut self.dashboard.heatmap_days,
        );
        Self::apply_env_parse(
            "TF_DASHBOARD_VELOCITY_WEEKS",
            &mut self.dashboard.velocity_weeks,
        );
        Self::apply_env_parse(
            "TF_DASHBOARD_CALENDAR_FIRST_WEEKDAY",
            &mut self.dashboard.calendar_first_weekday,
        );
        Self::apply_env_parse(
            "TF_DASHBOARD_UTC_OFFSET_MINUTES",
            &mut self.dashboard.utc_offset_minutes,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated, blanks dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
