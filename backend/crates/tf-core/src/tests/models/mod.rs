mod dashboard_widget;
mod priority;
mod project_color;
mod project_member;
mod task;
mod theme;
mod widget_type;
