use crate::analytics::{Velocity, completion_rate};
use crate::{Priority, Task};

use serde::Serialize;

/// Five 0-100 scores plotted on the analytics radar chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductivityScores {
    pub focus: f64,
    pub efficiency: f64,
    pub consistency: f64,
    pub quality: f64,
    pub speed: f64,
}

impl ProductivityScores {
    pub fn compute(tasks: &[Task], velocity: &Velocity) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let completed_high = tasks
            .iter()
            .filter(|task| task.completed && task.priority == Priority::High)
            .count();
        let rate = f64::from(completion_rate(completed, total));

        Self {
            focus: (rate + 10.0).min(100.0),
            efficiency: (completed as f64 / total.max(1) as f64 * 100.0).min(100.0),
            consistency: (25.0 * velocity.active_windows() as f64).min(100.0),
            quality: (20.0 * completed_high as f64).min(100.0),
            speed: (10.0 * velocity.total() as f64).min(100.0),
        }
    }

    /// Chart order: focus, efficiency, consistency, quality, speed
    pub fn as_array(&self) -> [f64; 5] {
        [self.focus, self.efficiency, self.consistency, self.quality, self.speed]
    }
}
