use crate::{Choice, ProjectDto};

use serde::Serialize;

/// Create and edit form view model; `project` is set when editing
#[derive(Debug, Serialize)]
pub struct ProjectFormResponse {
    pub project: Option<ProjectDto>,
    pub color_choices: Vec<Choice>,
}
