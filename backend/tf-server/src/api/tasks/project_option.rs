use tf_core::Project;

use serde::Serialize;

/// Project reference for task pages and the project filter dropdown
#[derive(Debug, Serialize)]
pub struct ProjectOption {
    pub id: String,
    pub title: String,
    pub color: String,
}

impl From<&Project> for ProjectOption {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title.clone(),
            color: p.color.as_str().to_string(),
        }
    }
}
