use crate::ProjectDto;

use tf_db::ProjectSummary;

use serde::Serialize;
use uuid::Uuid;

/// Project list entry with its task counts
#[derive(Debug, Serialize)]
pub struct ProjectSummaryDto {
    #[serde(flatten)]
    pub project: ProjectDto,
    pub task_count: i64,
    pub completed_task_count: i64,
    pub is_owner: bool,
}

impl ProjectSummaryDto {
    pub fn from_summary(summary: ProjectSummary, viewer_id: Uuid) -> Self {
        Self {
            is_owner: summary.project.is_owned_by(viewer_id),
            task_count: summary.task_count,
            completed_task_count: summary.completed_task_count,
            project: summary.project.into(),
        }
    }
}
