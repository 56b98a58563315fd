pub mod dashboard_widget;
pub mod identity;
pub mod priority;
pub mod profile;
pub mod project;
pub mod project_color;
pub mod project_member;
pub mod task;
pub mod theme;
pub mod user_stats;
pub mod widget_type;
