#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectStatusFilter {
    #[default]
    Any,
    Completed,
    Active,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: ProjectStatusFilter,
    /// Case-insensitive substring matched against title and description
    pub search: Option<String>,
}
