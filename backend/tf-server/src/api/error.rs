//! REST API error types
//!
//! Every failure leaves the service as `{"error": {"code", "message", ...}}`
//! with a matching status. Permission failures are reported as not-found so a
//! caller cannot probe for resources it cannot see.

use tf_auth::AuthError;
use tf_core::CoreError;
use tf_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Page the client should go to next
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    /// Every message when several fields failed at once
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400, several fields at once
    #[error("Validation failed: {errors:?} {location}")]
    InvalidForm {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// 404; also used for resources the caller may not touch
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        redirect_to: Option<String>,
        location: ErrorLocation,
    },

    /// 409
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 401, wrong credentials or deactivated account
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// 303 to the login page, remembering where the caller was going
    #[error("Login required for {next} {location}")]
    LoginRequired {
        next: String,
        location: ErrorLocation,
    },

    /// 303 to the profile page
    #[error("Profile required {location}")]
    ProfileRequired { location: ErrorLocation },

    /// 303 away from pages meant for anonymous callers
    #[error("Already signed in {location}")]
    AlreadyAuthenticated { location: ErrorLocation },

    /// 429
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// 500; the message is logged, never sent
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S, redirect_to: &str) -> Self {
        ApiError::NotFound {
            message: message.into(),
            redirect_to: Some(redirect_to.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        ApiError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Login URL carrying `next`, percent-encoded
    pub fn login_url(next: &str) -> String {
        format!("/login?next={}", urlencoding::encode(next))
    }
}

/// 303 with a Location header and the same JSON error envelope
fn see_other(code: &str, message: &str, to: String) -> Response {
    let location = HeaderValue::from_str(&to).ok();
    let body = ApiErrorBody {
        code: code.into(),
        message: message.into(),
        field: None,
        redirect_to: Some(to),
        errors: Vec::new(),
    };

    let mut response =
        (StatusCode::SEE_OTHER, Json(ApiErrorResponse { error: body })).into_response();
    if let Some(value) = location {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            ApiError::LoginRequired { .. }
            | ApiError::ProfileRequired { .. }
            | ApiError::AlreadyAuthenticated { .. } => log::debug!("{}", self),
            _ => log::warn!("{}", self),
        }

        let (status, code, message, field, redirect_to, errors) = match self {
            ApiError::LoginRequired { next, .. } => {
                return see_other(
                    "LOGIN_REQUIRED",
                    "Please log in to continue",
                    Self::login_url(&next),
                );
            }
            ApiError::ProfileRequired { .. } => {
                return see_other(
                    "PROFILE_REQUIRED",
                    "Please complete your profile first.",
                    "/profile".into(),
                );
            }
            ApiError::AlreadyAuthenticated { .. } => {
                return see_other(
                    "ALREADY_AUTHENTICATED",
                    "You are already signed in",
                    "/profile".into(),
                );
            }
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                message,
                field,
                None,
                Vec::new(),
            ),
            ApiError::InvalidForm { errors, .. } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join(". "),
                errors.first().map(|e| e.field.clone()),
                None,
                errors,
            ),
            ApiError::NotFound {
                message,
                redirect_to,
                ..
            } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                message,
                None,
                redirect_to,
                Vec::new(),
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                "CONFLICT",
                message,
                None,
                None,
                Vec::new(),
            ),
            ApiError::Unauthenticated { message, .. } => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                message,
                None,
                None,
                Vec::new(),
            ),
            ApiError::RateLimited { message, .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                message,
                None,
                None,
                Vec::new(),
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
                None,
                None,
                Vec::new(),
            ),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
            redirect_to,
            errors,
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Storage failures; unique violations become conflicts, everything else is internal
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::Conflict { message, .. } => ApiError::Conflict { message, location },
            other => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        DbError::from(e).into()
    }
}

/// Domain parse failures are caller input errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = match &e {
            CoreError::InvalidPriority { .. } => Some("priority"),
            CoreError::InvalidTheme { .. } => Some("theme"),
            CoreError::InvalidProjectColor { .. } => Some("color"),
            CoreError::InvalidWidgetType { .. } => Some("widget_type"),
            CoreError::InvalidMonth { .. } => Some("month"),
            CoreError::Validation { .. } | CoreError::Uuid { .. } => None,
        };
        let message = match &e {
            CoreError::InvalidPriority { value, .. } => {
                format!("'{value}' is not a valid priority")
            }
            CoreError::InvalidTheme { value, .. } => format!("'{value}' is not a valid theme"),
            CoreError::InvalidProjectColor { value, .. } => {
                format!("'{value}' is not a valid color")
            }
            CoreError::InvalidWidgetType { value, .. } => {
                format!("'{value}' is not a valid widget type")
            }
            CoreError::InvalidMonth { year, month, .. } => {
                format!("{year}-{month} is not a valid month")
            }
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::Uuid { source, .. } => format!("Invalid id: {source}"),
        };
        ApiError::Validation {
            message,
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::RateLimitExceeded { window_secs, .. } => ApiError::RateLimited {
                message: format!("Too many login attempts. Try again in {window_secs} seconds."),
                location,
            },
            other if other.is_unauthenticated() => ApiError::Unauthenticated {
                message: "Your session is no longer valid".to_string(),
                location,
            },
            other => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
