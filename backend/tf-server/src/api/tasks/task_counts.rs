use tf_core::{Priority, Task, analytics::PriorityStats};

use serde::Serialize;

/// Counts over a filtered task listing
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        let priorities = PriorityStats::from_tasks(tasks);
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
            high: priorities.count(Priority::High),
            medium: priorities.count(Priority::Medium),
            low: priorities.count(Priority::Low),
        }
    }
}
