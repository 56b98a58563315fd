//! Time-bucketed completion counts: sparkline, heatmap, velocity and
//! weekday distribution. Every bucket is keyed on the local completion date.

use crate::Task;
use crate::analytics::ReportingWindow;

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub value: usize,
}

fn completions_by_day(tasks: &[Task], window: &ReportingWindow) -> HashMap<NaiveDate, usize> {
    let mut by_day = HashMap::new();
    for day in tasks.iter().filter_map(|task| window.completion_date(task)) {
        *by_day.entry(day).or_insert(0) += 1;
    }
    by_day
}

fn count_between(by_day: &HashMap<NaiveDate, usize>, first: NaiveDate, last: NaiveDate) -> usize {
    by_day
        .iter()
        .filter(|(day, _)| (first..=last).contains(*day))
        .map(|(_, count)| count)
        .sum()
}

/// One entry per day for the `days` days ending today, oldest first
pub fn daily_completions(tasks: &[Task], window: &ReportingWindow, days: u32) -> Vec<DailyCount> {
    let by_day = completions_by_day(tasks, window);
    (0..u64::from(days))
        .rev()
        .map(|back| {
            let date = window.days_back(back);
            DailyCount {
                date,
                value: by_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Completions from `since` through today inclusive
pub fn completed_since(tasks: &[Task], window: &ReportingWindow, since: NaiveDate) -> usize {
    let by_day = completions_by_day(tasks, window);
    count_between(&by_day, since, window.today())
}

/// Completions per weekday over all time, Monday first
pub fn weekday_distribution(tasks: &[Task], window: &ReportingWindow) -> [usize; 7] {
    let mut slots = [0; 7];
    for day in tasks.iter().filter_map(|task| window.completion_date(task)) {
        slots[day.weekday().num_days_from_monday() as usize] += 1;
    }
    slots
}

/// Last seven days with short weekday labels, as shown beside the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySeries {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    pub total: usize,
}

impl WeeklySeries {
    pub fn build(tasks: &[Task], window: &ReportingWindow) -> Self {
        let days = daily_completions(tasks, window, 7);
        Self {
            labels: days.iter().map(|day| day.date.format("%a").to_string()).collect(),
            counts: days.iter().map(|day| day.value).collect(),
            total: days.iter().map(|day| day.value).sum(),
        }
    }
}

/// Daily completions over a trailing window together with the busiest day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub days: Vec<DailyCount>,
    pub max: usize,
}

impl Heatmap {
    pub fn build(tasks: &[Task], window: &ReportingWindow, days: u32) -> Self {
        let days = daily_completions(tasks, window, days);
        let max = days.iter().map(|day| day.value).max().unwrap_or(0);
        Self { days, max }
    }

    /// `value / max` in `0.0..=1.0`, 0 for an empty heatmap
    pub fn intensity(&self, value: usize) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        value as f64 / self.max as f64
    }
}

/// Completions per non-overlapping trailing 7-day window.
/// Window `w` covers `today - 7w - 6 ..= today - 7w`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Velocity {
    /// Most recent window first
    pub windows: Vec<usize>,
    pub average: f64,
}

impl Velocity {
    pub fn build(tasks: &[Task], window: &ReportingWindow, weeks: u32) -> Self {
        let by_day = completions_by_day(tasks, window);
        let windows: Vec<usize> = (0..u64::from(weeks))
            .map(|week| {
                let last = window.days_back(week * 7);
                let first = window.days_back(week * 7 + 6);
                count_between(&by_day, first, last)
            })
            .collect();
        let average = if windows.is_empty() {
            0.0
        } else {
            windows.iter().sum::<usize>() as f64 / windows.len() as f64
        };
        Self { windows, average }
    }

    /// Average rounded to one decimal place, ties to even
    pub fn rounded_average(&self) -> f64 {
        (self.average * 10.0).round_ties_even() / 10.0
    }

    /// Same windows, oldest first
    pub fn trend(&self) -> Vec<usize> {
        self.windows.iter().rev().copied().collect()
    }

    pub fn total(&self) -> usize {
        self.windows.iter().sum()
    }

    pub fn active_windows(&self) -> usize {
        self.windows.iter().filter(|count| **count > 0).count()
    }
}
