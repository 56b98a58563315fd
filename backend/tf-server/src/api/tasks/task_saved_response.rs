use crate::TaskDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskSavedResponse {
    pub success: bool,
    pub message: String,
    pub redirect_to: String,
    pub task: TaskDto,
}
