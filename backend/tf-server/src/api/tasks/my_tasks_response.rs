use crate::TaskDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MyTasksResponse {
    pub pending: Vec<TaskDto>,
    pub completed: Vec<TaskDto>,
}
