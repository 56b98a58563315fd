use crate::Theme;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application-level user record, exactly one per identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub identity_id: Uuid,
    pub bio: String,
    pub phone: String,
    pub location: String,
    pub avatar: Option<String>,
    pub theme: Theme,
    pub email_notifications: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(identity_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            identity_id,
            bio: String::new(),
            phone: String::new(),
            location: String::new(),
            avatar: None,
            theme: Theme::Light,
            email_notifications: true,
            created_at: now,
            updated_at: now,
        }
    }
}
