use super::{completed_on, date, task, window};
use crate::Priority;
use crate::analytics::{ProductivityScores, Velocity};

#[test]
fn given_no_tasks_when_scoring_then_only_focus_bonus_remains() {
    let velocity = Velocity::build(&[], &window(), 4);

    let scores = ProductivityScores::compute(&[], &velocity);

    assert_eq!(scores.as_array(), [10.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn given_recent_high_priority_completions_when_scoring_then_formulas_apply() {
    // Given
    let window = window();
    let mut tasks = Vec::new();
    for day in [18, 17, 10] {
        let mut done = completed_on(date(2026, 3, day));
        done.priority = Priority::High;
        tasks.push(done);
    }
    tasks.push(task("open", Priority::Low));
    let velocity = Velocity::build(&tasks, &window, 4);

    // When
    let scores = ProductivityScores::compute(&tasks, &velocity);

    // Then
    assert_eq!(scores.focus, 85.0);
    assert_eq!(scores.efficiency, 75.0);
    assert_eq!(scores.consistency, 50.0);
    assert_eq!(scores.quality, 60.0);
    assert_eq!(scores.speed, 30.0);
}

#[test]
fn test_scores_are_capped_at_100() {
    let window = window();
    let tasks: Vec<_> = (0..12u64)
        .map(|i| {
            let mut done = completed_on(window.days_back((i % 4) * 7));
            done.priority = Priority::High;
            done
        })
        .collect();
    let velocity = Velocity::build(&tasks, &window, 4);

    let scores = ProductivityScores::compute(&tasks, &velocity);

    assert_eq!(scores.as_array(), [100.0; 5]);
}
