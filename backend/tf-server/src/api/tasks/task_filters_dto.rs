use serde::Serialize;

/// Filters applied to a task listing, echoed back normalised
#[derive(Debug, Serialize)]
pub struct TaskFiltersDto {
    pub status: &'static str,
    pub priority: Option<String>,
    pub project_id: Option<String>,
    pub search: Option<String>,
    pub sort: String,
}
