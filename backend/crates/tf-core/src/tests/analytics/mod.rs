mod activity;
mod calendar;
mod history;
mod scores;
mod summary;

use crate::analytics::ReportingWindow;
use crate::{Priority, Task};

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reporting window pinned to Wednesday 2026-03-18, UTC
pub(crate) fn window() -> ReportingWindow {
    ReportingWindow::utc(date(2026, 3, 18))
}

pub(crate) fn task(title: &str, priority: Priority) -> Task {
    let mut task = Task::new(Uuid::nil(), title.to_string());
    task.priority = priority;
    task
}

/// Task completed at noon UTC on `day`
pub(crate) fn completed_on(day: NaiveDate) -> Task {
    let mut task = task("done", Priority::Medium);
    let noon = Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap());
    task.set_completed(true, noon);
    task
}
