use crate::{Priority, Task};

use std::cmp::Ordering;

/// The `limit` most recently created tasks, newest first
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut recent: Vec<&Task> = tasks.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}

/// Every incomplete high-priority task, earliest due date first, undated last
pub fn high_priority_incomplete(tasks: &[Task]) -> Vec<&Task> {
    let mut urgent: Vec<&Task> = tasks
        .iter()
        .filter(|task| !task.completed && task.priority == Priority::High)
        .collect();
    urgent.sort_by(|a, b| due_date_nulls_last(a, b));
    urgent
}

/// First `limit` entries of [`high_priority_incomplete`]
pub fn urgent_high_priority(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut urgent = high_priority_incomplete(tasks);
    urgent.truncate(limit);
    urgent
}

fn due_date_nulls_last(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
