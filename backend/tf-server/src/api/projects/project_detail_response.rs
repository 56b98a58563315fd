use crate::{MemberDto, ProjectDto, TaskDto};

use serde::Serialize;

/// Project page: the project, its tasks from every owner and its members
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub project: ProjectDto,
    pub tasks: Vec<TaskDto>,
    pub members: Vec<MemberDto>,
    pub is_owner: bool,
    pub status: &'static str,
}
