use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 150;
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 3;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MAX_DESCRIPTION_LENGTH: usize = 10000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 500;

pub const DEFAULT_MAX_BIO_LENGTH: usize = 200;
pub const DEFAULT_MAX_PHONE_LENGTH: usize = 20;
pub const DEFAULT_MAX_LOCATION_LENGTH: usize = 100;
pub const MAX_PROFILE_FIELD_LENGTH: usize = 1000;

/// Field limits applied to request payloads before they reach the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_username_length: usize,
    pub max_username_length: usize,
    pub min_password_length: usize,
    /// Task and project titles
    pub max_title_length: usize,
    /// Task and project descriptions
    pub max_description_length: usize,
    pub max_bio_length: usize,
    pub max_phone_length: usize,
    pub max_location_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            max_username_length: MAX_USERNAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_bio_length: DEFAULT_MAX_BIO_LENGTH,
            max_phone_length: DEFAULT_MAX_PHONE_LENGTH,
            max_location_length: DEFAULT_MAX_LOCATION_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_username_length < MIN_USERNAME_LENGTH
            || self.max_username_length > MAX_USERNAME_LENGTH
            || self.min_username_length > self.max_username_length
        {
            return Err(ConfigError::config(format!(
                "validation username bounds must satisfy {} <= min <= max <= {}, got {}..{}",
                MIN_USERNAME_LENGTH,
                MAX_USERNAME_LENGTH,
                self.min_username_length,
                self.max_username_length
            )));
        }

        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if self.max_title_length == 0 || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_title_length must be 1-{}, got {}",
                MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length > MAX_DESCRIPTION_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_description_length must be at most {}, got {}",
                MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        for (name, value) in [
            ("max_bio_length", self.max_bio_length),
            ("max_phone_length", self.max_phone_length),
            ("max_location_length", self.max_location_length),
        ] {
            if value == 0 || value > MAX_PROFILE_FIELD_LENGTH {
                return Err(ConfigError::config(format!(
                    "validation.{} must be 1-{}, got {}",
                    name, MAX_PROFILE_FIELD_LENGTH, value
                )));
            }
        }

        Ok(())
    }
}
