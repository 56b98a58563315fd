//! Dashboard REST API handlers
//!
//! Each page loads the caller's tasks once and hands them to the aggregation
//! engine with a reporting window pinned to the configured UTC offset.

use crate::{
    AnalyticsResponse, ApiError, ApiResult, AppState, CalendarQuery, CalendarResponse,
    CurrentProfile, DashboardResponse, ProjectSummaryDto, ReportsResponse, TaskDto,
    UpdateWidgetRequest, UserStatsDto, VelocityDto, WeekdayCount, WidgetDto, WidgetsResponse,
    non_blank,
};

use tf_core::{
    DashboardWidget, UserStats, WidgetType,
    analytics::{
        Heatmap, MonthView, PriorityStats, ProductivityScores, TaskSummary, Velocity,
        WeeklySeries, YearMonth, completed_since, high_priority_incomplete, recent_tasks,
        urgent_high_priority, weekday_distribution,
    },
};
use tf_db::{
    DashboardWidgetRepository, ProjectFilter, ProjectRepository, TaskRepository,
    UserStatsRepository,
};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Datelike, Utc};
use uuid::Uuid;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// =============================================================================
// Handlers
// =============================================================================

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    current: CurrentProfile,
) -> ApiResult<Json<DashboardResponse>> {
    let profile_id = current.profile.id;
    let settings = &state.config.dashboard;
    let window = state.reporting_window();
    let today = window.today();

    let tasks = TaskRepository::list_for_owner(&state.pool, profile_id).await?;
    let velocity = Velocity::build(&tasks, &window, settings.velocity_weeks);

    let projects =
        ProjectRepository::list_accessible(&state.pool, profile_id, &ProjectFilter::default())
            .await?;
    let widgets = widget_layout(&state, profile_id).await?;
    let stats = refresh_stats(&state, profile_id).await?;

    Ok(Json(DashboardResponse {
        summary: TaskSummary::from_tasks(&tasks, &window),
        recent_tasks: TaskDto::from_tasks(recent_tasks(&tasks, settings.recent_tasks), today),
        high_priority_tasks: TaskDto::from_tasks(
            urgent_high_priority(&tasks, settings.high_priority_tasks),
            today,
        ),
        weekly: WeeklySeries::build(&tasks, &window),
        heatmap: Heatmap::build(&tasks, &window, settings.heatmap_days).into(),
        priority_stats: PriorityStats::from_tasks(&tasks),
        velocity: VelocityDto::from(&velocity),
        projects: projects
            .into_iter()
            .map(|summary| ProjectSummaryDto::from_summary(summary, profile_id))
            .collect(),
        widgets,
        stats,
    }))
}

/// GET /dashboard/analytics
pub async fn analytics(
    State(state): State<AppState>,
    current: CurrentProfile,
) -> ApiResult<Json<AnalyticsResponse>> {
    let window = state.reporting_window();
    let tasks = TaskRepository::list_for_owner(&state.pool, current.profile.id).await?;

    let summary = TaskSummary::from_tasks(&tasks, &window);
    let priority_stats = PriorityStats::from_tasks(&tasks);
    let velocity = Velocity::build(&tasks, &window, state.config.dashboard.velocity_weeks);
    let scores = ProductivityScores::compute(&tasks, &velocity);

    let time_distribution = WEEKDAYS
        .iter()
        .zip(weekday_distribution(&tasks, &window))
        .map(|(weekday, count)| WeekdayCount {
            weekday: *weekday,
            count,
        })
        .collect();

    Ok(Json(AnalyticsResponse {
        completion_rate: summary.completion_rate,
        high_priority_count: priority_stats.high,
        trends: velocity.trend(),
        priority_stats,
        time_distribution,
        score_values: scores.as_array(),
        scores,
    }))
}

/// GET /dashboard/reports
pub async fn reports(
    State(state): State<AppState>,
    current: CurrentProfile,
) -> ApiResult<Json<ReportsResponse>> {
    let profile_id = current.profile.id;
    let window = state.reporting_window();
    let tasks = TaskRepository::list_for_owner(&state.pool, profile_id).await?;

    let week_start = window.week_start();
    let summary = TaskSummary::from_tasks(&tasks, &window);
    let stats = refresh_stats(&state, profile_id).await?;

    Ok(Json(ReportsResponse {
        today: window.today(),
        week_start,
        completed_this_week: completed_since(&tasks, &window, week_start),
        completion_rate: summary.completion_rate,
        high_priority_tasks: TaskDto::from_tasks(high_priority_incomplete(&tasks), window.today()),
        stats,
    }))
}

/// GET /dashboard/calendar?year=&month=
pub async fn calendar(
    State(state): State<AppState>,
    current: CurrentProfile,
    Query(query): Query<CalendarQuery>,
) -> ApiResult<Json<CalendarResponse>> {
    let window = state.reporting_window();
    let today = window.today();

    let year = match non_blank(query.year.as_deref()) {
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|_| ApiError::validation("year", format!("'{raw}' is not a valid year")))?,
        None => today.year(),
    };
    let month = match non_blank(query.month.as_deref()) {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| ApiError::validation("month", format!("'{raw}' is not a valid month")))?,
        None => today.month(),
    };
    let year_month = YearMonth::new(year, month)?;

    let tasks = TaskRepository::list_for_owner(&state.pool, current.profile.id).await?;
    let first_weekday = state.config.dashboard.first_weekday();
    let view = MonthView::build(&tasks, &year_month, first_weekday, today);

    Ok(Json(CalendarResponse {
        year: view.year,
        month: view.month,
        month_name: view.month_name,
        weeks: view.weeks,
        first_weekday: first_weekday.to_string(),
        tasks_by_day: view
            .tasks_by_day
            .into_iter()
            .map(|(day, tasks)| (day, TaskDto::from_tasks(tasks, today)))
            .collect(),
        prev_year: view.prev_year,
        prev_month: view.prev_month,
        next_year: view.next_year,
        next_month: view.next_month,
        total_tasks: view.total_tasks,
        completed_tasks: view.completed_tasks,
        overdue_tasks: view.overdue_tasks,
        today,
    }))
}

/// POST /dashboard/widgets
///
/// Upserts one widget's position and visibility, returning the whole layout
pub async fn update_widget(
    State(state): State<AppState>,
    current: CurrentProfile,
    Json(req): Json<UpdateWidgetRequest>,
) -> ApiResult<Json<WidgetsResponse>> {
    let profile_id = current.profile.id;
    let widget_type = WidgetType::from_str(req.widget_type.trim())?;

    let repo = DashboardWidgetRepository::new(state.pool.clone());
    let mut layout = repo.list_for_profile(profile_id).await?;
    if layout.is_empty() {
        // First customisation stores the whole default layout
        layout = DashboardWidget::default_layout(profile_id);
        for widget in &layout {
            repo.upsert(widget).await?;
        }
    }

    let next_position = i64::try_from(layout.len()).unwrap_or(i64::MAX);
    let mut widget = layout
        .into_iter()
        .find(|w| w.widget_type == widget_type)
        .unwrap_or_else(|| DashboardWidget::new(profile_id, widget_type, next_position, true));
    if let Some(position) = req.position {
        widget.position = position;
    }
    if let Some(visible) = req.is_visible {
        widget.is_visible = visible;
    }
    repo.upsert(&widget).await?;

    Ok(Json(WidgetsResponse {
        widgets: widget_layout(&state, profile_id).await?,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

async fn widget_layout(state: &AppState, profile_id: Uuid) -> ApiResult<Vec<WidgetDto>> {
    let stored = DashboardWidgetRepository::new(state.pool.clone())
        .list_for_profile(profile_id)
        .await?;

    Ok(DashboardWidget::effective_layout(profile_id, stored)
        .into_iter()
        .map(WidgetDto::from)
        .collect())
}

/// Best-effort cache; a failed refresh is logged and answered from scratch
async fn refresh_stats(state: &AppState, profile_id: Uuid) -> ApiResult<UserStatsDto> {
    let repo = UserStatsRepository::new(state.pool.clone());
    match repo.refresh(profile_id, Utc::now()).await {
        Ok(stats) => Ok(stats.into()),
        Err(e) => {
            log::warn!("Stats refresh for {} failed: {}", profile_id, e);
            Ok(repo
                .find(profile_id)
                .await?
                .unwrap_or_else(|| UserStats::empty(profile_id))
                .into())
        }
    }
}
