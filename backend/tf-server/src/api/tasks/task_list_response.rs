use crate::{Choice, ProjectOption, TaskCounts, TaskDto, TaskFiltersDto};

use tf_core::analytics::WeeklySeries;

use serde::Serialize;

/// Task list page view model
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskDto>,
    pub filters: TaskFiltersDto,
    pub counts: TaskCounts,
    pub projects: Vec<ProjectOption>,
    pub priority_choices: Vec<Choice>,
    /// Completions over the last seven days, across every task of the caller
    pub weekly: WeeklySeries,
}
