//! Project entity - groups tasks and is shared with member profiles.

use crate::ProjectColor;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub color: ProjectColor,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(owner_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            description: None,
            color: ProjectColor::default(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, profile_id: Uuid) -> bool {
        self.owner_id == profile_id
    }

    /// Flip completion and return the new state
    pub fn toggle(&mut self, now: DateTime<Utc>) -> bool {
        self.completed = !self.completed;
        self.updated_at = now;
        self.completed
    }
}
