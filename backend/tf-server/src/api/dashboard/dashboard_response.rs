use crate::{HeatmapDto, ProjectSummaryDto, TaskDto, UserStatsDto, VelocityDto, WidgetDto};

use tf_core::analytics::{PriorityStats, TaskSummary, WeeklySeries};

use serde::Serialize;

/// Main dashboard view model
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: TaskSummary,
    pub recent_tasks: Vec<TaskDto>,
    /// Incomplete high-priority tasks, soonest due first
    pub high_priority_tasks: Vec<TaskDto>,
    pub weekly: WeeklySeries,
    pub heatmap: HeatmapDto,
    pub priority_stats: PriorityStats,
    pub velocity: VelocityDto,
    pub projects: Vec<ProjectSummaryDto>,
    pub widgets: Vec<WidgetDto>,
    pub stats: UserStatsDto,
}
