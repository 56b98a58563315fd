use serde::Deserialize;

/// Task status filter of the project detail page
#[derive(Debug, Default, Deserialize)]
pub struct ProjectDetailQuery {
    /// completed | active | any
    #[serde(default)]
    pub status: Option<String>,
}
