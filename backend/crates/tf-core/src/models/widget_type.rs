use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Dashboard widget kinds, listed in default display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    TaskSummary,
    RecentTasks,
    ProjectProgress,
    UpcomingDeadlines,
    CompletionStats,
}

impl WidgetType {
    pub const ALL: [WidgetType; 5] = [
        Self::TaskSummary,
        Self::RecentTasks,
        Self::ProjectProgress,
        Self::UpcomingDeadlines,
        Self::CompletionStats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskSummary => "task_summary",
            Self::RecentTasks => "recent_tasks",
            Self::ProjectProgress => "project_progress",
            Self::UpcomingDeadlines => "upcoming_deadlines",
            Self::CompletionStats => "completion_stats",
        }
    }
}

impl FromStr for WidgetType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let caller = Location::caller();
        Self::ALL
            .into_iter()
            .find(|widget| widget.as_str() == s)
            .ok_or_else(|| CoreError::InvalidWidgetType {
                value: s.to_string(),
                location: ErrorLocation::from(caller),
            })
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
