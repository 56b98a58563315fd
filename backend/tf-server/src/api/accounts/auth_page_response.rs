use serde::Serialize;

/// View model of the login and signup pages
#[derive(Debug, Serialize)]
pub struct AuthPageResponse {
    pub page: &'static str,
    pub next: String,
    pub min_password_length: usize,
}
