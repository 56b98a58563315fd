use crate::{SESSION_COOKIE, clear_session_cookie, session_cookie, token_from_headers};

use axum::http::{HeaderMap, HeaderValue, header};
use googletest::prelude::*;

#[test]
fn given_remember_me_when_building_cookie_then_max_age_set() {
    // When
    let cookie = session_cookie("abc", Some(3600), false);

    // Then
    assert_that!(cookie, starts_with("tf_session=abc"));
    assert_that!(cookie, contains_substring("HttpOnly"));
    assert_that!(cookie, contains_substring("SameSite=Lax"));
    assert_that!(cookie, contains_substring("Max-Age=3600"));
    assert_that!(cookie, not(contains_substring("Secure")));
}

#[test]
fn given_browser_session_when_building_cookie_then_no_max_age() {
    let cookie = session_cookie("abc", None, true);

    assert_that!(cookie, not(contains_substring("Max-Age")));
    assert_that!(cookie, contains_substring("Secure"));
}

#[test]
fn test_clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie(false);

    assert_that!(cookie, starts_with(format!("{SESSION_COOKIE}=")));
    assert_that!(cookie, contains_substring("Max-Age=0"));
}

#[test]
fn given_cookie_among_others_when_reading_token_then_found() {
    // Given
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; tf_session=tok123; other=1"),
    );

    // When
    let token = token_from_headers(&headers);

    // Then
    assert_eq!(token.as_deref(), Some("tok123"));
}

#[test]
fn given_bearer_and_cookie_when_reading_token_then_bearer_wins() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
    headers.insert(header::COOKIE, HeaderValue::from_static("tf_session=from-cookie"));

    assert_eq!(token_from_headers(&headers).as_deref(), Some("from-header"));
}

#[test]
fn given_empty_cookie_when_reading_token_then_none() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("tf_session="));

    assert_eq!(token_from_headers(&headers), None);
}
