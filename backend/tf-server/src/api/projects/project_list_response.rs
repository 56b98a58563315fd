use crate::ProjectSummaryDto;

use serde::Serialize;

/// List of projects response
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummaryDto>,
    pub status: &'static str,
    pub search: Option<String>,
}
