use super::{completed_on, date, task, window};
use crate::Priority;
use crate::analytics::{PriorityStats, TaskSummary, completion_rate};

#[test]
fn test_completion_rate_is_zero_without_tasks() {
    assert_eq!(completion_rate(0, 0), 0);
}

#[test]
fn test_completion_rate_rounds() {
    assert_eq!(completion_rate(1, 3), 33);
    assert_eq!(completion_rate(2, 3), 67);
    assert_eq!(completion_rate(3, 3), 100);
    // half-way values round to even
    assert_eq!(completion_rate(1, 8), 12);
}

#[test]
fn given_mixed_tasks_when_summarised_then_counts_match() {
    // Given
    let window = window();
    let mut due_today = task("due", Priority::Low);
    due_today.due_date = Some(window.today());
    let mut due_today_done = completed_on(date(2026, 3, 1));
    due_today_done.due_date = Some(window.today());
    let tasks = vec![
        completed_on(window.today()),
        completed_on(date(2026, 3, 17)),
        due_today,
        due_today_done,
    ];

    // When
    let summary = TaskSummary::from_tasks(&tasks, &window);

    // Then
    assert_eq!(summary.total, 4);
    assert_eq!(summary.completed, 3);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.completed_today, 1);
    assert_eq!(summary.due_today, 1);
    assert_eq!(summary.completion_rate, 75);
}

#[test]
fn given_completions_across_priorities_when_counted_then_completion_ignored() {
    // Given
    let mut done_high = completed_on(date(2026, 3, 2));
    done_high.priority = Priority::High;
    let tasks = vec![
        done_high,
        task("a", Priority::High),
        task("b", Priority::Low),
    ];

    // When
    let stats = PriorityStats::from_tasks(&tasks);

    // Then
    assert_eq!(stats.high, 2);
    assert_eq!(stats.medium, 0);
    assert_eq!(stats.low, 1);
    assert_eq!(stats.total(), 3);
}
