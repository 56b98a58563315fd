//! Session token transport: the `tf_session` cookie or an `Authorization: Bearer` header.

use axum::http::{HeaderMap, header};
use cookie::{Cookie, SameSite, time::Duration};

pub const SESSION_COOKIE: &str = "tf_session";

const BEARER_PREFIX: &str = "Bearer ";

/// `Set-Cookie` value carrying a freshly issued token.
/// Without `max_age_secs` the cookie lives for the browser session.
pub fn session_cookie(token: &str, max_age_secs: Option<i64>, secure: bool) -> String {
    let mut builder = Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    if let Some(secs) = max_age_secs {
        builder = builder.max_age(Duration::seconds(secs));
    }
    builder.build().to_string()
}

/// `Set-Cookie` value that expires the session cookie
pub fn clear_session_cookie(secure: bool) -> String {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
        .to_string()
}

/// Bearer header first, then the session cookie
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE && !c.value().is_empty())
        .map(|c| c.value().to_string())
}
