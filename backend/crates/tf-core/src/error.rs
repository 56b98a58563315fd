use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project color: {value} {location}")]
    InvalidProjectColor {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid widget type: {value} {location}")]
    InvalidWidgetType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid calendar month: {year}-{month} {location}")]
    InvalidMonth {
        year: i32,
        month: u32,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
