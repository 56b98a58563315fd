use super::{completed_on, date, task};
use crate::Priority;
use crate::analytics::{MonthView, YearMonth, month_grid};

use chrono::Weekday;

#[test]
fn test_year_month_rejects_out_of_range() {
    assert!(YearMonth::new(2026, 0).is_err());
    assert!(YearMonth::new(2026, 13).is_err());
    assert!(YearMonth::new(0, 5).is_err());
    assert!(YearMonth::new(10_000, 1).is_err());
}

#[test]
fn test_year_month_navigation_wraps_years() {
    let january = YearMonth::new(2026, 1).unwrap();
    let december = YearMonth::new(2026, 12).unwrap();

    assert_eq!(january.previous(), (2025, 12));
    assert_eq!(december.following(), (2027, 1));
    assert_eq!(december.last_day(), date(2026, 12, 31));
    assert_eq!(january.name(), "January");
}

#[test]
fn test_february_leap_year_last_day() {
    assert_eq!(YearMonth::new(2028, 2).unwrap().last_day(), date(2028, 2, 29));
}

#[test]
fn test_month_grid_sunday_first() {
    // March 2026 starts on a Sunday
    let grid = month_grid(&YearMonth::new(2026, 3).unwrap(), Weekday::Sun);

    assert_eq!(grid.len(), 5);
    assert_eq!(grid[0], [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(grid[4], [29, 30, 31, 0, 0, 0, 0]);
}

#[test]
fn test_month_grid_monday_first() {
    let grid = month_grid(&YearMonth::new(2026, 3).unwrap(), Weekday::Mon);

    assert_eq!(grid.len(), 6);
    assert_eq!(grid[0], [0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(grid[5], [30, 31, 0, 0, 0, 0, 0]);
}

#[test]
fn given_tasks_inside_and_outside_month_when_grouping_then_each_in_month_task_appears_once() {
    // Given
    let today = date(2026, 3, 18);
    let month = YearMonth::new(2026, 3).unwrap();
    let mut low = task("low", Priority::Low);
    low.due_date = Some(date(2026, 3, 5));
    let mut high = task("high", Priority::High);
    high.due_date = Some(date(2026, 3, 5));
    let mut done = completed_on(date(2026, 3, 2));
    done.due_date = Some(date(2026, 3, 31));
    let mut april = task("april", Priority::Medium);
    april.due_date = Some(date(2026, 4, 1));
    let mut overdue_feb = task("february", Priority::Medium);
    overdue_feb.due_date = Some(date(2026, 2, 10));
    let undated = task("undated", Priority::Medium);
    let tasks = vec![low, high, done, april, overdue_feb, undated];

    // When
    let view = MonthView::build(&tasks, &month, Weekday::Sun, today);

    // Then
    let grouped: usize = view.tasks_by_day.values().map(Vec::len).sum();
    assert_eq!(grouped, 3);
    assert_eq!(view.total_tasks, 3);
    assert_eq!(view.completed_tasks, 1);
    let fifth: Vec<&str> = view.tasks_by_day[&5].iter().map(|t| t.title.as_str()).collect();
    assert_eq!(fifth, vec!["high", "low"]);
    assert!(view.tasks_by_day.contains_key(&31));
    assert_eq!(view.month_name, "March");
    assert_eq!((view.prev_year, view.prev_month), (2026, 2));
    assert_eq!((view.next_year, view.next_month), (2026, 4));
    // low and high (due 5th) plus february are overdue
    assert_eq!(view.overdue_tasks, 3);
}
