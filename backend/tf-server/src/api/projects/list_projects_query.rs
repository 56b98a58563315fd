use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// completed | active | any
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}
