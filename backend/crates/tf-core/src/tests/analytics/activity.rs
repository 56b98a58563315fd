use super::{completed_on, date, task};
use crate::Priority;
use crate::analytics::{high_priority_incomplete, recent_tasks, urgent_high_priority};

use chrono::Duration;

#[test]
fn given_more_tasks_than_limit_when_listing_recent_then_newest_first() {
    // Given
    let mut tasks = Vec::new();
    for i in 0..12 {
        let mut t = task(&format!("task {i}"), Priority::Medium);
        t.created_at += Duration::minutes(i);
        tasks.push(t);
    }

    // When
    let recent = recent_tasks(&tasks, 10);

    // Then
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].title, "task 11");
    assert_eq!(recent[9].title, "task 2");
}

#[test]
fn given_high_priority_tasks_when_ranking_urgency_then_due_date_ascending_nulls_last() {
    // Given
    let mut undated = task("undated", Priority::High);
    undated.due_date = None;
    let mut later = task("later", Priority::High);
    later.due_date = Some(date(2026, 4, 1));
    let mut sooner = task("sooner", Priority::High);
    sooner.due_date = Some(date(2026, 3, 20));
    let mut done = completed_on(date(2026, 3, 1));
    done.priority = Priority::High;
    done.due_date = Some(date(2026, 3, 2));
    let low = task("low", Priority::Low);
    let tasks = vec![undated, later, done, low, sooner];

    // When
    let urgent = urgent_high_priority(&tasks, 5);

    // Then
    let titles: Vec<&str> = urgent.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["sooner", "later", "undated"]);
}

#[test]
fn test_urgent_high_priority_truncates() {
    let tasks: Vec<_> = (0..8).map(|_| task("h", Priority::High)).collect();

    assert_eq!(urgent_high_priority(&tasks, 5).len(), 5);
    assert_eq!(high_priority_incomplete(&tasks).len(), 8);
}
