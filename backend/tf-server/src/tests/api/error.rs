use crate::{ApiError, FormValidator};

use tf_core::CoreError;
use tf_db::DbError;

use std::panic::Location;

use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use serde_json::Value;

async fn render(error: ApiError) -> (StatusCode, Option<String>, Value) {
    let response = error.into_response();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, location, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_validation_error_carries_field() {
    let (status, _, body) = render(ApiError::validation("title", "Task title is required")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "title");
    assert_eq!(body["error"]["message"], "Task title is required");
    assert!(body["error"].get("errors").is_none());
}

#[tokio::test]
async fn test_invalid_form_lists_every_error() {
    let mut form = FormValidator::new();
    form.push("username", "Username is required");
    form.push("password2", "Passwords do not match");
    let error = form.finish().unwrap_err();

    let (status, _, body) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "username");
    assert_eq!(
        body["error"]["message"],
        "Username is required. Passwords do not match"
    );
    assert_eq!(body["error"]["errors"].as_array().unwrap().len(), 2);
    assert_eq!(body["error"]["errors"][1]["field"], "password2");
}

#[tokio::test]
async fn test_not_found_includes_redirect() {
    let (status, location, body) = render(ApiError::not_found("Task not found", "/tasks")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(location, None);
    assert_eq!(body["error"]["redirect_to"], "/tasks");
}

#[tokio::test]
async fn test_login_required_redirects_with_encoded_next() {
    let error = ApiError::LoginRequired {
        next: "/tasks?status=completed".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, location, body) = render(error).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        location.as_deref(),
        Some("/login?next=%2Ftasks%3Fstatus%3Dcompleted")
    );
    assert_eq!(body["error"]["code"], "LOGIN_REQUIRED");
}

#[tokio::test]
async fn test_profile_required_redirects_to_profile() {
    let error = ApiError::ProfileRequired {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, location, _) = render(error).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/profile"));
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let (status, _, body) =
        render(ApiError::internal("connection refused at /var/db/taskflow.db")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "An internal error occurred");
}

#[test]
fn test_db_conflict_maps_to_conflict() {
    let db = DbError::Conflict {
        message: "Username already exists".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error: ApiError = db.into();

    assert!(matches!(error, ApiError::Conflict { ref message, .. } if message == "Username already exists"));
}

#[test]
fn test_core_parse_error_maps_to_field_validation() {
    let core = CoreError::InvalidPriority {
        value: "urgent".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error: ApiError = core.into();

    match error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("priority"));
            assert_eq!(message, "'urgent' is not a valid priority");
        }
        other => panic!("unexpected error: {other}"),
    }
}
