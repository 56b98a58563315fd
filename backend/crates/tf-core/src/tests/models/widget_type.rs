use crate::WidgetType;

use std::str::FromStr;

#[test]
fn test_widget_type_from_str() {
    assert_eq!(
        WidgetType::from_str("upcoming_deadlines").unwrap(),
        WidgetType::UpcomingDeadlines
    );
    assert!(WidgetType::from_str("weather").is_err());
}

#[test]
fn test_widget_type_display() {
    assert_eq!(WidgetType::CompletionStats.to_string(), "completion_stats");
    assert_eq!(WidgetType::TaskSummary.to_string(), "task_summary");
}
