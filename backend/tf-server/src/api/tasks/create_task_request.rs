use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title (required)
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// low | medium | high, defaults to medium
    #[serde(default)]
    pub priority: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub due_date: Option<String>,
    /// Must be a project the caller owns or is a member of
    #[serde(default)]
    pub project_id: Option<String>,
}
