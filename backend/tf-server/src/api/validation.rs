//! Request field validation shared by every form-style endpoint.

use crate::{ApiError, ApiResult, FieldError};

use tf_config::ValidationConfig;

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Collects every field error of a submission so they can be reported together
#[derive(Debug, Default)]
pub struct FormValidator {
    errors: Vec<FieldError>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Records `message` unless `ok`; returns `ok`
    pub fn check(&mut self, ok: bool, field: &str, message: impl Into<String>) -> bool {
        if !ok {
            self.push(field, message);
        }
        ok
    }

    pub fn required(&mut self, value: &str, field: &str, message: &str) -> bool {
        self.check(!value.trim().is_empty(), field, message)
    }

    pub fn max_chars(&mut self, value: &str, max: usize, field: &str, label: &str) -> bool {
        self.check(
            value.chars().count() <= max,
            field,
            format!("{label} must not exceed {max} characters"),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[track_caller]
    pub fn finish(self) -> ApiResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::InvalidForm {
                errors: self.errors,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    /// Title rules shared by tasks and projects
    pub fn title(&mut self, title: &str, limits: &ValidationConfig, label: &str) {
        if self.required(title, "title", &format!("{label} title is required")) {
            self.max_chars(title, limits.max_title_length, "title", "Title");
        }
    }

    pub fn description(&mut self, description: &str, limits: &ValidationConfig) {
        self.max_chars(
            description,
            limits.max_description_length,
            "description",
            "Description",
        );
    }
}

/// Trimmed value, `None` when blank
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// `YYYY-MM-DD`; blank means no date
#[track_caller]
pub fn parse_due_date(raw: Option<&str>) -> ApiResult<Option<NaiveDate>> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(&value, DATE_FORMAT)
            .map(Some)
            .map_err(|_| ApiError::validation("due_date", "Due date must be a YYYY-MM-DD date")),
    }
}

/// Optional id from a form field; blank means none
#[track_caller]
pub fn parse_optional_id(raw: Option<&str>, field: &str) -> ApiResult<Option<Uuid>> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => Uuid::parse_str(&value)
            .map(Some)
            .map_err(|_| ApiError::validation(field, format!("'{value}' is not a valid id"))),
    }
}

/// Id from the URL path. Malformed ids cannot name anything, so they are not found.
#[track_caller]
pub fn parse_path_id(raw: &str, what: &str, redirect_to: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(format!("{what} not found"), redirect_to))
}

/// Local redirect target or `fallback`; rejects absolute and protocol-relative URLs.
/// Any ASCII control character disqualifies the target.
pub fn local_path_or(next: Option<&str>, fallback: &str) -> String {
    match next.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(|c| c.is_ascii_control()) =>
        {
            path.to_string()
        }
        _ => fallback.to_string(),
    }
}
