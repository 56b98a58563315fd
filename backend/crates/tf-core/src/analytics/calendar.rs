use crate::{CoreError, Result as CoreErrorResult, Task};

use std::collections::BTreeMap;
use std::panic::Location;

use chrono::{Datelike, Month, NaiveDate, Weekday};
use error_location::ErrorLocation;
use serde::Serialize;

/// A validated calendar month in years 1..=9999
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: i32,
    month: u32,
    first: NaiveDate,
    last: NaiveDate,
}

impl YearMonth {
    #[track_caller]
    pub fn new(year: i32, month: u32) -> CoreErrorResult<Self> {
        let caller = Location::caller();
        let invalid = || CoreError::InvalidMonth {
            year,
            month,
            location: ErrorLocation::from(caller),
        };
        if !(1..=9999).contains(&year) {
            return Err(invalid());
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let (next_year, next_month) = Self::step_forward(year, month);
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|date| date.pred_opt())
            .ok_or_else(invalid)?;
        Ok(Self {
            year,
            month,
            first,
            last,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// English month name, e.g. "January"
    pub fn name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .map_or("", |month| month.name())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first..=self.last).contains(&date)
    }

    /// (year, month) of the preceding month
    pub fn previous(&self) -> (i32, u32) {
        if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }

    /// (year, month) of the following month
    pub fn following(&self) -> (i32, u32) {
        Self::step_forward(self.year, self.month)
    }

    fn step_forward(year: i32, month: u32) -> (i32, u32) {
        if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        }
    }
}

/// Weeks of the month as rows of seven day numbers, starting on
/// `first_weekday`. Days outside the month are 0.
pub fn month_grid(month: &YearMonth, first_weekday: Weekday) -> Vec<[u32; 7]> {
    let lead = (month.first_day().weekday().num_days_from_monday() + 7
        - first_weekday.num_days_from_monday())
        % 7;

    let mut weeks = Vec::with_capacity(6);
    let mut week = [0; 7];
    let mut slot = lead as usize;
    for day in 1..=month.last_day().day() {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// Everything the calendar page shows for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView<'a> {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub weeks: Vec<[u32; 7]>,
    /// Tasks due in the month keyed by day, high priority first within a day
    pub tasks_by_day: BTreeMap<u32, Vec<&'a Task>>,
    pub prev_year: i32,
    pub prev_month: u32,
    pub next_year: i32,
    pub next_month: u32,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Overdue across all months, not just this one
    pub overdue_tasks: usize,
}

impl<'a> MonthView<'a> {
    pub fn build(tasks: &'a [Task], month: &YearMonth, first_weekday: Weekday, today: NaiveDate) -> Self {
        let mut in_month: Vec<&Task> = tasks
            .iter()
            .filter(|task| task.due_date.is_some_and(|due| month.contains(due)))
            .collect();
        in_month.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| b.priority.rank().cmp(&a.priority.rank()))
        });

        let total_tasks = in_month.len();
        let completed_tasks = in_month.iter().filter(|task| task.completed).count();

        let mut tasks_by_day: BTreeMap<u32, Vec<&Task>> = BTreeMap::new();
        for task in in_month {
            if let Some(due) = task.due_date {
                tasks_by_day.entry(due.day()).or_default().push(task);
            }
        }

        let (prev_year, prev_month) = month.previous();
        let (next_year, next_month) = month.following();

        Self {
            year: month.year(),
            month: month.month(),
            month_name: month.name(),
            weeks: month_grid(month, first_weekday),
            tasks_by_day,
            prev_year,
            prev_month,
            next_year,
            next_month,
            total_tasks,
            completed_tasks,
            overdue_tasks: tasks.iter().filter(|task| task.is_overdue(today)).count(),
        }
    }
}
