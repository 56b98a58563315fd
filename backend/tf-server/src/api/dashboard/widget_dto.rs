use tf_core::DashboardWidget;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WidgetDto {
    pub widget_type: String,
    pub position: i64,
    pub is_visible: bool,
}

impl From<DashboardWidget> for WidgetDto {
    fn from(w: DashboardWidget) -> Self {
        Self {
            widget_type: w.widget_type.as_str().to_string(),
            position: w.position,
            is_visible: w.is_visible,
        }
    }
}
