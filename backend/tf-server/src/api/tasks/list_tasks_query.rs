use serde::Deserialize;

/// Query parameters for listing tasks; blank values mean "any"
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    /// completed | incomplete | any
    #[serde(default)]
    pub status: Option<String>,
    /// low | medium | high | any
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    /// created_at | due_date | priority, `-` prefix for descending
    #[serde(default)]
    pub sort: Option<String>,
}
