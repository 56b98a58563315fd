use serde::Serialize;

/// Body of the task and project toggle endpoints
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    pub message: String,
}
