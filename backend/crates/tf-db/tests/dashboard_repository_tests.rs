mod common;

use common::{create_test_account, create_test_pool, create_test_project, create_test_task};

use tf_core::{DashboardWidget, Priority, WidgetType};
use tf_db::{DashboardWidgetRepository, ProjectRepository, TaskRepository, UserStatsRepository};

use chrono::Utc;
use googletest::prelude::*;

#[tokio::test]
async fn given_no_configuration_when_listing_widgets_then_empty() {
    let pool = create_test_pool().await;
    let (_, profile) = create_test_account(&pool, "fresh").await;

    let widgets = DashboardWidgetRepository::new(pool.clone())
        .list_for_profile(profile.id)
        .await
        .unwrap();

    assert_that!(widgets, is_empty());
}

#[tokio::test]
async fn given_existing_widget_when_upserting_same_type_then_single_row_updated() {
    // Given
    let pool = create_test_pool().await;
    let (_, profile) = create_test_account(&pool, "layout").await;
    let repo = DashboardWidgetRepository::new(pool.clone());
    let original = repo
        .upsert(&DashboardWidget::new(profile.id, WidgetType::RecentTasks, 1, true))
        .await
        .unwrap();

    // When
    let updated = repo
        .upsert(&DashboardWidget::new(profile.id, WidgetType::RecentTasks, 4, false))
        .await
        .unwrap();
    repo.upsert(&DashboardWidget::new(profile.id, WidgetType::TaskSummary, 0, true))
        .await
        .unwrap();

    // Then
    assert_that!(updated.id, eq(original.id));
    assert_that!(updated.position, eq(4));
    assert_that!(updated.is_visible, eq(false));
    let stored = repo.list_for_profile(profile.id).await.unwrap();
    let types: Vec<WidgetType> = stored.iter().map(|w| w.widget_type).collect();
    assert_that!(types, elements_are![eq(&WidgetType::TaskSummary), eq(&WidgetType::RecentTasks)]);
}

#[tokio::test]
async fn given_tasks_and_projects_when_refreshing_stats_then_counts_match_live_tables() {
    // Given
    let pool = create_test_pool().await;
    let (_, profile) = create_test_account(&pool, "stats").await;
    let (_, other) = create_test_account(&pool, "other").await;
    let mut done = create_test_task(&pool, profile.id, "Done", Priority::High).await;
    done.set_completed(true, Utc::now());
    TaskRepository::update(&pool, &done).await.unwrap();
    create_test_task(&pool, profile.id, "Open", Priority::Low).await;
    create_test_task(&pool, other.id, "Not mine", Priority::Low).await;
    let mut finished = create_test_project(&pool, profile.id, "Finished").await;
    finished.toggle(Utc::now());
    ProjectRepository::set_completed(&pool, &finished).await.unwrap();
    let repo = UserStatsRepository::new(pool.clone());

    // When
    let stats = repo.refresh(profile.id, Utc::now()).await.unwrap();

    // Then
    assert_that!(stats.total_tasks, eq(2));
    assert_that!(stats.completed_tasks, eq(1));
    assert_that!(stats.total_projects, eq(1));
    assert_that!(stats.completed_projects, eq(1));
    assert_that!(stats.completion_rate(), eq(50.0));
}

#[tokio::test]
async fn given_stale_stats_when_refreshed_again_then_row_overwritten() {
    // Given
    let pool = create_test_pool().await;
    let (_, profile) = create_test_account(&pool, "again").await;
    let repo = UserStatsRepository::new(pool.clone());
    repo.refresh(profile.id, Utc::now()).await.unwrap();
    create_test_task(&pool, profile.id, "New", Priority::Low).await;

    // When
    repo.refresh(profile.id, Utc::now()).await.unwrap();

    // Then
    let stored = repo.find(profile.id).await.unwrap().unwrap();
    assert_that!(stored.total_tasks, eq(1));
    assert_that!(stored.completion_rate(), eq(0.0));
}
