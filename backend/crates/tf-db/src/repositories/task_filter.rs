use tf_core::Priority;

use uuid::Uuid;

/// Completion filter shared by task and project-detail listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionFilter {
    #[default]
    Any,
    Completed,
    Incomplete,
}

impl CompletionFilter {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Any => None,
            Self::Completed => Some(true),
            Self::Incomplete => Some(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub completion: CompletionFilter,
    pub priority: Option<Priority>,
    pub project_id: Option<Uuid>,
    /// Case-insensitive substring matched against title and description
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortKey {
    CreatedAt,
    DueDate,
    Priority,
}

/// Sort key plus direction, parsed from `created_at`, `-due_date`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSort {
    pub key: TaskSortKey,
    pub descending: bool,
}

impl Default for TaskSort {
    fn default() -> Self {
        Self {
            key: TaskSortKey::CreatedAt,
            descending: true,
        }
    }
}

impl TaskSort {
    /// `None` for anything outside the three known keys
    pub fn parse(value: &str) -> Option<Self> {
        let (descending, name) = match value.strip_prefix('-') {
            Some(name) => (true, name),
            None => (false, value),
        };
        let key = match name {
            "created_at" => TaskSortKey::CreatedAt,
            "due_date" => TaskSortKey::DueDate,
            "priority" => TaskSortKey::Priority,
            _ => return None,
        };
        Some(Self { key, descending })
    }

    pub fn as_param(&self) -> String {
        let name = match self.key {
            TaskSortKey::CreatedAt => "created_at",
            TaskSortKey::DueDate => "due_date",
            TaskSortKey::Priority => "priority",
        };
        if self.descending {
            format!("-{name}")
        } else {
            name.to_string()
        }
    }

    /// ORDER BY clause; undated tasks always sort last, ties fall back to newest first
    pub(crate) fn order_by(&self) -> &'static str {
        match (self.key, self.descending) {
            (TaskSortKey::CreatedAt, true) => "created_at DESC, rowid DESC",
            (TaskSortKey::CreatedAt, false) => "created_at ASC, rowid ASC",
            (TaskSortKey::DueDate, false) => {
                "due_date IS NULL, due_date ASC, created_at DESC, rowid DESC"
            }
            (TaskSortKey::DueDate, true) => {
                "due_date IS NULL, due_date DESC, created_at DESC, rowid DESC"
            }
            (TaskSortKey::Priority, false) => "priority_rank ASC, created_at DESC, rowid DESC",
            (TaskSortKey::Priority, true) => "priority_rank DESC, created_at DESC, rowid DESC",
        }
    }
}

/// Search text lowercased with Unicode rules; SQLite LOWER() folds ASCII only
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchTerm(String);

impl SearchTerm {
    /// None for missing or blank input
    pub(crate) fn parse(search: Option<&str>) -> Option<Self> {
        search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Self(s.to_lowercase()))
    }

    pub(crate) fn matches(&self, title: &str, description: Option<&str>) -> bool {
        title.to_lowercase().contains(&self.0)
            || description.is_some_and(|d| d.to_lowercase().contains(&self.0))
    }
}
