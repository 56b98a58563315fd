use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Keep the session for the remember-me lifetime instead of the browser session
    #[serde(default)]
    pub remember_me: bool,
    /// Where to go after login; only local paths are honoured
    #[serde(default)]
    pub next: Option<String>,
}
