use tf_core::analytics::{PriorityStats, ProductivityScores};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WeekdayCount {
    pub weekday: &'static str,
    pub count: usize,
}

/// Analytics page view model
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub completion_rate: u32,
    pub high_priority_count: usize,
    /// Weekly completions, oldest first
    pub trends: Vec<usize>,
    pub priority_stats: PriorityStats,
    /// Monday first
    pub time_distribution: Vec<WeekdayCount>,
    pub scores: ProductivityScores,
    /// `scores` in chart order
    pub score_values: [f64; 5],
}
