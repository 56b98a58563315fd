use tf_core::Profile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub bio: String,
    pub phone: String,
    pub location: String,
    pub avatar: Option<String>,
    pub theme: String,
    pub email_notifications: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Profile> for ProfileDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id.to_string(),
            bio: p.bio,
            phone: p.phone,
            location: p.location,
            avatar: p.avatar,
            theme: p.theme.as_str().to_string(),
            email_notifications: p.email_notifications,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
