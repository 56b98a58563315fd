//! Column decoding shared by the repositories' row types.

use crate::{DbError, Result as DbErrorResult};

use tf_core::{CoreError, ErrorLocation};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[track_caller]
fn invalid(column: &'static str, message: String) -> DbError {
    DbError::Decode {
        column,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
pub(crate) fn uuid(value: &str, column: &'static str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| invalid(column, format!("invalid UUID: {e}")))
}

#[track_caller]
pub(crate) fn optional_uuid(value: Option<&str>, column: &'static str) -> DbErrorResult<Option<Uuid>> {
    value.map(|v| uuid(v, column)).transpose()
}

#[track_caller]
pub(crate) fn timestamp(value: i64, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| invalid(column, format!("invalid timestamp {value}")))
}

#[track_caller]
pub(crate) fn optional_timestamp(
    value: Option<i64>,
    column: &'static str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    value.map(|v| timestamp(v, column)).transpose()
}

#[track_caller]
pub(crate) fn optional_date(value: Option<&str>, column: &'static str) -> DbErrorResult<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v, DATE_FORMAT)
                .map_err(|e| invalid(column, format!("invalid date {v}: {e}")))
        })
        .transpose()
}

#[track_caller]
pub(crate) fn parsed<T>(value: &str, column: &'static str) -> DbErrorResult<T>
where
    T: FromStr<Err = CoreError>,
{
    T::from_str(value).map_err(|e| invalid(column, e.to_string()))
}

pub(crate) fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}
