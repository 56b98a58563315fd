use crate::ProjectDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectSavedResponse {
    pub success: bool,
    pub message: String,
    pub redirect_to: String,
    pub project: ProjectDto,
}
