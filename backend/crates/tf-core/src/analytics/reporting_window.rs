use crate::Task;

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Offset, Utc};

/// The day statistics are computed for, plus the offset that maps
/// completion instants onto local calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    today: NaiveDate,
    offset: FixedOffset,
}

impl ReportingWindow {
    pub fn new(today: NaiveDate, offset: FixedOffset) -> Self {
        Self { today, offset }
    }

    pub fn utc(today: NaiveDate) -> Self {
        Self::new(today, Utc.fix())
    }

    /// Window whose `today` is the local date of `now` at `offset`
    pub fn at(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self::new(now.with_timezone(&offset).date_naive(), offset)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// Local day the task was completed on; `None` for incomplete tasks
    pub fn completion_date(&self, task: &Task) -> Option<NaiveDate> {
        if !task.completed {
            return None;
        }
        task.completed_at.map(|at| self.local_date(at))
    }

    /// `today` minus `days`, saturating at the earliest representable date
    pub fn days_back(&self, days: u64) -> NaiveDate {
        self.today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
    }

    /// Monday of the current week
    pub fn week_start(&self) -> NaiveDate {
        self.days_back(u64::from(self.today.weekday().num_days_from_monday()))
    }
}
