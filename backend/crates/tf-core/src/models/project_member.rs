use crate::Project;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Membership row; the owner is never stored as a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub project_id: Uuid,
    pub profile_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ProjectMember {
    pub fn new(project_id: Uuid, profile_id: Uuid) -> Self {
        Self {
            project_id,
            profile_id,
            created_at: Utc::now(),
        }
    }
}

/// How a profile relates to a project it can see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectRole {
    Owner,
    Member,
}

impl ProjectRole {
    /// Role of `profile_id` on `project`, given whether it holds a membership row
    pub fn resolve(project: &Project, profile_id: Uuid, is_member: bool) -> Option<Self> {
        if project.is_owned_by(profile_id) {
            Some(Self::Owner)
        } else if is_member {
            Some(Self::Member)
        } else {
            None
        }
    }

    pub fn has_permission(&self, required: Permission) -> bool {
        matches!(
            (self, required),
            (Self::Owner, _) | (Self::Member, Permission::View | Permission::ToggleCompletion)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Permission {
    View,
    ToggleCompletion,
    Edit,
    ManageMembers,
}
