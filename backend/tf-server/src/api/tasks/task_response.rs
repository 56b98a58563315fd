use crate::{ProjectOption, TaskDto};

use serde::Serialize;

/// Task detail and delete confirmation view model
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: TaskDto,
    pub project: Option<ProjectOption>,
}
