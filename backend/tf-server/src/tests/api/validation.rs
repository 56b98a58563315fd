use crate::{ApiError, FormValidator, local_path_or, non_blank, parse_due_date, parse_path_id};

use tf_config::ValidationConfig;

use chrono::NaiveDate;
use googletest::prelude::*;

#[test]
fn given_clean_form_when_finishing_then_ok() {
    // Given
    let mut form = FormValidator::new();

    // When
    let required = form.required("Launch", "title", "Project title is required");

    // Then
    assert!(required);
    assert!(form.is_empty());
    assert!(form.finish().is_ok());
}

#[test]
fn given_blank_and_long_titles_when_validating_then_both_reported() {
    // Given
    let limits = ValidationConfig::default();
    let long = "x".repeat(limits.max_title_length + 1);
    let mut form = FormValidator::new();

    // When
    form.title("   ", &limits, "Task");
    form.title(&long, &limits, "Project");

    // Then
    match form.finish() {
        Err(ApiError::InvalidForm { errors, .. }) => {
            assert_that!(errors.len(), eq(2));
            assert_that!(errors[0].message, eq("Task title is required"));
            assert_that!(errors[1].message, starts_with("Title must not exceed"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_max_chars_counts_characters_not_bytes() {
    let mut form = FormValidator::new();

    assert!(form.max_chars("ééééé", 5, "bio", "Bio"));
    assert!(!form.max_chars("éééééé", 5, "bio", "Bio"));
}

#[test]
fn test_non_blank_trims_and_drops_empty() {
    assert_eq!(non_blank(Some("  hi  ")), Some("hi".to_string()));
    assert_eq!(non_blank(Some("   ")), None);
    assert_eq!(non_blank(None), None);
}

#[test]
fn test_parse_due_date() {
    assert_eq!(
        parse_due_date(Some("2024-03-15")).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 15)
    );
    assert_eq!(parse_due_date(Some("")).unwrap(), None);

    let error = parse_due_date(Some("15/03/2024")).unwrap_err();
    assert!(matches!(error, ApiError::Validation { field: Some(ref f), .. } if f == "due_date"));
}

#[test]
fn test_malformed_path_id_is_not_found() {
    let error = parse_path_id("not-a-uuid", "Task", "/tasks").unwrap_err();

    match error {
        ApiError::NotFound {
            message,
            redirect_to,
            ..
        } => {
            assert_eq!(message, "Task not found");
            assert_eq!(redirect_to.as_deref(), Some("/tasks"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_local_path_or_rejects_external_targets() {
    assert_eq!(local_path_or(Some("/tasks/my-tasks"), "/profile"), "/tasks/my-tasks");
    assert_eq!(local_path_or(Some("//evil.example"), "/profile"), "/profile");
    assert_eq!(local_path_or(Some("https://evil.example"), "/profile"), "/profile");
    assert_eq!(local_path_or(Some("/\\evil.example"), "/profile"), "/profile");
    assert_eq!(local_path_or(None, "/profile"), "/profile");
}

#[test]
fn test_local_path_or_rejects_embedded_control_characters() {
    assert_eq!(local_path_or(Some("/\t/evil.example"), "/profile"), "/profile");
    assert_eq!(local_path_or(Some("/\n/evil.example"), "/profile"), "/profile");
    assert_eq!(local_path_or(Some("/tasks\r"), "/profile"), "/tasks");
    assert_eq!(local_path_or(Some("/tasks\u{7f}x"), "/profile"), "/profile");
}
