use tf_core::Identity;

use serde::Serialize;

/// Account details; never carries the password hash
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: i64,
    pub last_login: Option<i64>,
}

impl From<Identity> for IdentityDto {
    fn from(i: Identity) -> Self {
        Self {
            id: i.id.to_string(),
            display_name: i.display_name(),
            username: i.username,
            email: i.email,
            first_name: i.first_name,
            last_name: i.last_name,
            is_active: i.is_active,
            created_at: i.created_at.timestamp(),
            last_login: i.last_login.map(|t| t.timestamp()),
        }
    }
}
