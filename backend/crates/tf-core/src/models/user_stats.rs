use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cached per-profile counters. Recomputed on read, never authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub profile_id: Uuid,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub total_projects: i64,
    pub completed_projects: i64,
    pub last_updated: DateTime<Utc>,
}

impl UserStats {
    pub fn empty(profile_id: Uuid) -> Self {
        Self {
            profile_id,
            total_tasks: 0,
            completed_tasks: 0,
            total_projects: 0,
            completed_projects: 0,
            last_updated: Utc::now(),
        }
    }

    /// Unrounded percentage, 0 when there are no tasks
    pub fn completion_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        self.completed_tasks as f64 / self.total_tasks as f64 * 100.0
    }
}
