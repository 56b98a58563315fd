use crate::{Choice, ProjectOption, TaskDto};

use serde::Serialize;

/// Create and edit form view model; `task` is set when editing
#[derive(Debug, Serialize)]
pub struct TaskFormResponse {
    pub task: Option<TaskDto>,
    pub projects: Vec<ProjectOption>,
    pub priority_choices: Vec<Choice>,
}
