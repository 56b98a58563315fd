//! Task entity - the unit of work every statistic is computed from.

use crate::Priority;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task belongs to exactly one profile and optionally to a project.
/// `completed_at` is set whenever `completed` flips to true and cleared when it flips back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub project_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(owner_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            project_id: None,
            title,
            description: None,
            completed: false,
            completed_at: None,
            priority: Priority::default(),
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the completion flag, maintaining `completed_at`.
    /// Re-applying the current state keeps the original completion time.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        if self.completed == completed {
            return;
        }
        self.completed = completed;
        self.completed_at = completed.then_some(now);
        self.updated_at = now;
    }

    /// Flip completion and return the new state
    pub fn toggle(&mut self, now: DateTime<Utc>) -> bool {
        self.set_completed(!self.completed, now);
        self.completed
    }

    /// Incomplete with a due date strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.due_date == Some(day)
    }
}
