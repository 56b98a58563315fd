use serde::Deserialize;

/// Partial update; absent fields keep their value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Image reference; an empty string clears it
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub email_notifications: Option<bool>,
}
