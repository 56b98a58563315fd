pub mod dashboard_widget_repository;
pub mod identity_repository;
pub mod profile_repository;
pub mod project_filter;
pub mod project_member_repository;
pub mod project_repository;
pub mod task_filter;
pub mod task_repository;
pub mod user_stats_repository;
