use crate::{Priority, Task};

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

#[test]
fn test_task_new_defaults() {
    let task = Task::new(Uuid::new_v4(), "Write spec".to_string());

    assert!(!task.completed);
    assert!(task.completed_at.is_none());
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.project_id.is_none());
}

#[test]
fn given_incomplete_task_when_toggled_twice_then_original_state_restored() {
    // Given
    let mut task = Task::new(Uuid::new_v4(), "Toggle me".to_string());
    let now = Utc::now();

    // When
    let first = task.toggle(now);
    let second = task.toggle(now + Duration::minutes(1));

    // Then
    assert!(first);
    assert!(!second);
    assert!(!task.completed);
    assert!(task.completed_at.is_none());
}

#[test]
fn given_completed_task_when_completed_again_then_completion_time_kept() {
    // Given
    let mut task = Task::new(Uuid::new_v4(), "Done".to_string());
    let first = Utc::now();
    task.set_completed(true, first);

    // When
    task.set_completed(true, first + Duration::hours(3));

    // Then
    assert_eq!(task.completed_at, Some(first));
}

#[test]
fn test_task_is_overdue() {
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let mut task = Task::new(Uuid::new_v4(), "Late".to_string());

    assert!(!task.is_overdue(today));

    task.due_date = today.pred_opt();
    assert!(task.is_overdue(today));

    task.due_date = Some(today);
    assert!(!task.is_overdue(today));

    task.due_date = today.pred_opt();
    task.set_completed(true, Utc::now());
    assert!(!task.is_overdue(today));
}
