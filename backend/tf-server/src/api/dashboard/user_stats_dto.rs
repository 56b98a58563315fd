use tf_core::UserStats;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserStatsDto {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub total_projects: i64,
    pub completed_projects: i64,
    pub completion_rate: f64,
    pub last_updated: i64,
}

impl From<UserStats> for UserStatsDto {
    fn from(s: UserStats) -> Self {
        Self {
            completion_rate: s.completion_rate(),
            total_tasks: s.total_tasks,
            completed_tasks: s.completed_tasks,
            total_projects: s.total_projects,
            completed_projects: s.completed_projects,
            last_updated: s.last_updated.timestamp(),
        }
    }
}
