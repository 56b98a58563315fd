use crate::{MemberDto, ProjectDto};

use serde::Serialize;

/// Member management page
#[derive(Debug, Serialize)]
pub struct MembersResponse {
    pub project: ProjectDto,
    pub members: Vec<MemberDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
