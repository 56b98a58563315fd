pub mod analytics_response;
pub mod calendar_query;
pub mod calendar_response;
#[allow(clippy::module_inception)]
pub mod dashboard;
pub mod dashboard_response;
pub mod heatmap_dto;
pub mod reports_response;
pub mod update_widget_request;
pub mod user_stats_dto;
pub mod velocity_dto;
pub mod widget_dto;
pub mod widgets_response;
