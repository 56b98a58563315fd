use crate::analytics::ReportingWindow;
use crate::{Priority, Task};

use serde::Serialize;

/// `completed / total * 100` rounded half-to-even; 0 when `total` is 0
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round_ties_even() as u32
}

/// Headline counters shown at the top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub completed_today: usize,
    pub due_today: usize,
    pub completion_rate: u32,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task], window: &ReportingWindow) -> Self {
        let today = window.today();
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let completed_today = tasks
            .iter()
            .filter(|task| window.completion_date(task) == Some(today))
            .count();
        let due_today = tasks
            .iter()
            .filter(|task| !task.completed && task.is_due_on(today))
            .count();

        Self {
            total,
            completed,
            pending: total - completed,
            completed_today,
            due_today,
            completion_rate: completion_rate(completed, total),
        }
    }
}

/// Task counts per priority, regardless of completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityStats {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityStats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            match task.priority {
                Priority::High => stats.high += 1,
                Priority::Medium => stats.medium += 1,
                Priority::Low => stats.low += 1,
            }
            stats
        })
    }

    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}
