use tf_core::Task;

use chrono::NaiveDate;
use serde::Serialize;

/// Task DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub completed_at: Option<i64>,
    pub priority: String,
    pub priority_label: String,
    /// `YYYY-MM-DD`
    pub due_date: Option<String>,
    pub project_id: Option<String>,
    pub is_overdue: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TaskDto {
    /// `today` decides `is_overdue`
    pub fn from_task(t: &Task, today: NaiveDate) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title.clone(),
            description: t.description.clone(),
            completed: t.completed,
            completed_at: t.completed_at.map(|at| at.timestamp()),
            priority: t.priority.as_str().to_string(),
            priority_label: t.priority.label().to_string(),
            due_date: t.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
            project_id: t.project_id.map(|id| id.to_string()),
            is_overdue: t.is_overdue(today),
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }

    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Vec<Self> {
        tasks.into_iter().map(|t| Self::from_task(t, today)).collect()
    }
}
