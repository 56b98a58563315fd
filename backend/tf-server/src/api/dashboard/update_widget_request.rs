use serde::Deserialize;

/// Absent fields keep the widget's current value
#[derive(Debug, Deserialize)]
pub struct UpdateWidgetRequest {
    #[serde(default)]
    pub widget_type: String,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}
