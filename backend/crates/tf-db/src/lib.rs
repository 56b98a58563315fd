pub mod connection;
pub mod error;
pub mod repositories;

mod decode;

#[cfg(test)]
mod tests;

pub use connection::database::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::dashboard_widget_repository::DashboardWidgetRepository;
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::project_filter::{ProjectFilter, ProjectStatusFilter};
pub use repositories::project_member_repository::{MemberProfile, ProjectMemberRepository};
pub use repositories::project_repository::{ProjectRepository, ProjectSummary};
pub use repositories::task_filter::{CompletionFilter, TaskFilter, TaskSort, TaskSortKey};
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_stats_repository::UserStatsRepository;
