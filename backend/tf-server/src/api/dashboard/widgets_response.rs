use crate::WidgetDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WidgetsResponse {
    pub widgets: Vec<WidgetDto>,
}
