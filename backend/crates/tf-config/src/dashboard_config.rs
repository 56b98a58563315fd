use crate::{ConfigError, ConfigErrorResult};

use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc, Weekday};
use serde::Deserialize;

pub const DEFAULT_RECENT_TASKS: usize = 10;
pub const DEFAULT_HIGH_PRIORITY_TASKS: usize = 5;
pub const DEFAULT_HEATMAP_DAYS: u32 = 30;
pub const DEFAULT_VELOCITY_WEEKS: u32 = 4;
pub const MAX_LIST_LENGTH: usize = 100;
pub const MAX_HEATMAP_DAYS: u32 = 366;
pub const MAX_VELOCITY_WEEKS: u32 = 52;

// UTC-12:00 through UTC+14:00
pub const MIN_UTC_OFFSET_MINUTES: i32 = -12 * 60;
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// First column of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarStart {
    #[default]
    Sunday,
    Monday,
}

impl CalendarStart {
    pub fn weekday(self) -> Weekday {
        match self {
            CalendarStart::Sunday => Weekday::Sun,
            CalendarStart::Monday => Weekday::Mon,
        }
    }
}

impl FromStr for CalendarStart {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" => Ok(CalendarStart::Sunday),
            "monday" => Ok(CalendarStart::Monday),
            other => Err(ConfigError::dashboard(format!(
                "calendar_first_weekday must be 'sunday' or 'monday', got '{other}'"
            ))),
        }
    }
}

/// Sizes and windows used by the dashboard, analytics and calendar views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub recent_tasks: usize,
    pub high_priority_tasks: usize,
    pub heatmap_days: u32,
    pub velocity_weeks: u32,
    pub calendar_first_weekday: CalendarStart,
    /// Offset used to bucket completion timestamps into calendar days
    pub utc_offset_minutes: i32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_tasks: DEFAULT_RECENT_TASKS,
            high_priority_tasks: DEFAULT_HIGH_PRIORITY_TASKS,
            heatmap_days: DEFAULT_HEATMAP_DAYS,
            velocity_weeks: DEFAULT_VELOCITY_WEEKS,
            calendar_first_weekday: CalendarStart::default(),
            utc_offset_minutes: 0,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("recent_tasks", self.recent_tasks),
            ("high_priority_tasks", self.high_priority_tasks),
        ] {
            if value == 0 || value > MAX_LIST_LENGTH {
                return Err(ConfigError::dashboard(format!(
                    "dashboard.{} must be 1-{}, got {}",
                    name, MAX_LIST_LENGTH, value
                )));
            }
        }

        if self.heatmap_days == 0 || self.heatmap_days > MAX_HEATMAP_DAYS {
            return Err(ConfigError::dashboard(format!(
                "dashboard.heatmap_days must be 1-{}, got {}",
                MAX_HEATMAP_DAYS, self.heatmap_days
            )));
        }

        if self.velocity_weeks == 0 || self.velocity_weeks > MAX_VELOCITY_WEEKS {
            return Err(ConfigError::dashboard(format!(
                "dashboard.velocity_weeks must be 1-{}, got {}",
                MAX_VELOCITY_WEEKS, self.velocity_weeks
            )));
        }

        if !(MIN_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&self.utc_offset_minutes) {
            return Err(ConfigError::dashboard(format!(
                "dashboard.utc_offset_minutes must be {}..={}, got {}",
                MIN_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES, self.utc_offset_minutes
            )));
        }

        Ok(())
    }

    /// Reporting offset; UTC when the configured value is out of range.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    pub fn first_weekday(&self) -> Weekday {
        self.calendar_first_weekday.weekday()
    }
}
