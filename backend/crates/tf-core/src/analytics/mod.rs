//! Aggregation engine.
//!
//! Pure functions turning a profile's task list into dashboard, analytics,
//! report and calendar figures. Nothing here touches storage or the clock:
//! callers pass a [`ReportingWindow`] that pins "today" and the UTC offset
//! used to bucket completion timestamps into days.

pub mod activity;
pub mod calendar;
pub mod history;
pub mod reporting_window;
pub mod scores;
pub mod summary;

pub use activity::{high_priority_incomplete, recent_tasks, urgent_high_priority};
pub use calendar::{MonthView, YearMonth, month_grid};
pub use history::{DailyCount, Heatmap, Velocity, WeeklySeries, completed_since, daily_completions, weekday_distribution};
pub use reporting_window::ReportingWindow;
pub use scores::ProductivityScores;
pub use summary::{PriorityStats, TaskSummary, completion_rate};
