use super::{completed_on, date, task, window};
use crate::Priority;
use crate::analytics::{
    Heatmap, ReportingWindow, Velocity, WeeklySeries, completed_since, daily_completions,
    weekday_distribution,
};

use chrono::{FixedOffset, TimeZone, Utc};

#[test]
fn given_completions_when_building_seven_day_series_then_oldest_first_and_sum_matches() {
    // Given
    let window = window();
    let tasks = vec![
        completed_on(date(2026, 3, 18)),
        completed_on(date(2026, 3, 18)),
        completed_on(date(2026, 3, 12)),
        completed_on(date(2026, 3, 11)),
        task("open", Priority::Low),
    ];

    // When
    let series = daily_completions(&tasks, &window, 7);

    // Then
    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, date(2026, 3, 12));
    assert_eq!(series[6].date, date(2026, 3, 18));
    assert_eq!(series[0].value, 1);
    assert_eq!(series[6].value, 2);
    let sum: usize = series.iter().map(|d| d.value).sum();
    assert_eq!(sum, completed_since(&tasks, &window, date(2026, 3, 12)));
}

#[test]
fn test_weekly_series_labels() {
    let window = window();
    let tasks = vec![completed_on(date(2026, 3, 16))];

    let weekly = WeeklySeries::build(&tasks, &window);

    assert_eq!(weekly.labels.first().map(String::as_str), Some("Thu"));
    assert_eq!(weekly.labels.last().map(String::as_str), Some("Wed"));
    assert_eq!(weekly.counts, vec![0, 0, 0, 0, 1, 0, 0]);
    assert_eq!(weekly.total, 1);
}

#[test]
fn given_busy_day_when_building_heatmap_then_max_tracks_it() {
    // Given
    let window = window();
    let tasks = vec![
        completed_on(date(2026, 3, 1)),
        completed_on(date(2026, 3, 1)),
        completed_on(date(2026, 3, 1)),
        completed_on(date(2026, 3, 10)),
        completed_on(date(2026, 1, 1)),
    ];

    // When
    let heatmap = Heatmap::build(&tasks, &window, 30);

    // Then
    assert_eq!(heatmap.days.len(), 30);
    assert_eq!(heatmap.max, 3);
    assert_eq!(heatmap.intensity(3), 1.0);
    assert_eq!(heatmap.days.iter().map(|d| d.value).sum::<usize>(), 4);
}

#[test]
fn test_empty_heatmap_has_zero_intensity() {
    let heatmap = Heatmap::build(&[], &window(), 30);

    assert_eq!(heatmap.max, 0);
    assert_eq!(heatmap.intensity(0), 0.0);
}

#[test]
fn given_completions_over_five_weeks_when_computing_velocity_then_windows_cover_28_days() {
    // Given
    let window = window();
    let tasks = vec![
        completed_on(date(2026, 3, 18)), // window 0
        completed_on(date(2026, 3, 12)), // window 0 (today - 6)
        completed_on(date(2026, 3, 11)), // window 1
        completed_on(date(2026, 2, 26)), // window 2 (today - 20)
        completed_on(date(2026, 2, 19)), // window 3 (today - 27)
        completed_on(date(2026, 2, 18)), // outside
    ];

    // When
    let velocity = Velocity::build(&tasks, &window, 4);

    // Then
    assert_eq!(velocity.windows, vec![2, 1, 1, 1]);
    assert_eq!(velocity.total(), 5);
    assert_eq!(velocity.total(), completed_since(&tasks, &window, date(2026, 2, 19)));
    assert_eq!(velocity.average, 1.25);
    assert_eq!(velocity.rounded_average(), 1.2);
    assert_eq!(velocity.trend(), vec![1, 1, 1, 2]);
    assert_eq!(velocity.active_windows(), 4);
}

#[test]
fn test_velocity_average_rounds_ties_to_even() {
    let quarter = Velocity {
        windows: vec![1, 0, 0, 0],
        average: 0.25,
    };
    let three_quarters = Velocity {
        windows: vec![3, 0, 0, 0],
        average: 0.75,
    };

    assert_eq!(quarter.rounded_average(), 0.2);
    assert_eq!(three_quarters.rounded_average(), 0.8);
}

#[test]
fn test_weekday_distribution_is_monday_first() {
    let tasks = vec![
        completed_on(date(2026, 3, 16)), // Monday
        completed_on(date(2026, 3, 22)), // Sunday
        completed_on(date(2026, 3, 15)), // Sunday
    ];

    let distribution = weekday_distribution(&tasks, &window());

    assert_eq!(distribution, [1, 0, 0, 0, 0, 0, 2]);
}

#[test]
fn given_positive_offset_when_completed_late_utc_then_counted_on_next_local_day() {
    // Given
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let window = ReportingWindow::new(date(2026, 3, 18), offset);
    let mut late = task("late", Priority::Low);
    late.set_completed(true, Utc.with_ymd_and_hms(2026, 3, 17, 23, 30, 0).unwrap());

    // When
    let series = daily_completions(&[late], &window, 2);

    // Then
    assert_eq!(series[1].date, date(2026, 3, 18));
    assert_eq!(series[1].value, 1);
}

#[test]
fn test_week_start_is_monday() {
    assert_eq!(window().week_start(), date(2026, 3, 16));
    assert_eq!(ReportingWindow::utc(date(2026, 3, 16)).week_start(), date(2026, 3, 16));
}
