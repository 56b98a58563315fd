use crate::{TaskDto, UserStatsDto};

use chrono::NaiveDate;
use serde::Serialize;

/// Reports page view model
#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    pub today: NaiveDate,
    pub week_start: NaiveDate,
    pub completed_this_week: usize,
    pub completion_rate: u32,
    /// Every incomplete high-priority task
    pub high_priority_tasks: Vec<TaskDto>,
    pub stats: UserStatsDto,
}
