pub mod analytics;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::dashboard_widget::DashboardWidget;
pub use models::identity::Identity;
pub use models::priority::Priority;
pub use models::profile::Profile;
pub use models::project::Project;
pub use models::project_color::ProjectColor;
pub use models::project_member::{Permission, ProjectMember, ProjectRole};
pub use models::task::Task;
pub use models::theme::Theme;
pub use models::user_stats::UserStats;
pub use models::widget_type::WidgetType;
