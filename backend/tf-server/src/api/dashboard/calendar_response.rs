use crate::TaskDto;

use chrono::NaiveDate;
use serde::Serialize;

use std::collections::BTreeMap;

/// Calendar page view model
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    /// Seven day numbers per row, 0 for padding
    pub weeks: Vec<[u32; 7]>,
    /// First column of `weeks`
    pub first_weekday: String,
    pub tasks_by_day: BTreeMap<u32, Vec<TaskDto>>,
    pub prev_year: i32,
    pub prev_month: u32,
    pub next_year: i32,
    pub next_month: u32,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub overdue_tasks: usize,
    pub today: NaiveDate,
}
