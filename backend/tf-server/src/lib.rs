pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::{
            change_password, check_username, login, login_page, logout, signup, signup_page,
        },
        auth_page_response::AuthPageResponse,
        change_password_request::ChangePasswordRequest,
        check_username_query::CheckUsernameQuery,
        identity_dto::IdentityDto,
        login_request::LoginRequest,
        next_query::NextQuery,
        session_response::SessionResponse,
        signup_request::SignupRequest,
        username_availability_response::UsernameAvailabilityResponse,
    },
    action_response::ActionResponse,
    choice::Choice,
    dashboard::{
        analytics_response::{AnalyticsResponse, WeekdayCount},
        calendar_query::CalendarQuery,
        calendar_response::CalendarResponse,
        dashboard::{analytics, calendar, dashboard, reports, update_widget},
        dashboard_response::DashboardResponse,
        heatmap_dto::{HeatmapCell, HeatmapDto},
        reports_response::ReportsResponse,
        update_widget_request::UpdateWidgetRequest,
        user_stats_dto::UserStatsDto,
        velocity_dto::VelocityDto,
        widget_dto::WidgetDto,
        widgets_response::WidgetsResponse,
    },
    error::Result as ApiResult,
    error::{ApiError, ApiErrorBody, ApiErrorResponse, FieldError},
    extractors::{
        current_profile::CurrentProfile,
        session::{MaybeSession, Session, authenticate},
    },
    profile::{
        profile::{get_profile, update_profile},
        profile_dto::ProfileDto,
        profile_response::ProfileResponse,
        update_profile_request::UpdateProfileRequest,
    },
    projects::{
        create_project_request::CreateProjectRequest,
        list_projects_query::ListProjectsQuery,
        member_action_request::MemberActionRequest,
        member_dto::MemberDto,
        members_response::MembersResponse,
        project_detail_query::ProjectDetailQuery,
        project_detail_response::ProjectDetailResponse,
        project_dto::ProjectDto,
        project_form_response::ProjectFormResponse,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        project_saved_response::ProjectSavedResponse,
        project_summary_dto::ProjectSummaryDto,
        projects::{
            create_project, create_project_form, delete_project, delete_project_confirm,
            edit_project_form, get_project, list_members, list_projects, manage_members,
            toggle_project, update_project,
        },
        update_project_request::UpdateProjectRequest,
    },
    session::{
        SESSION_COOKIE, clear_session_cookie, session_cookie, token_from_headers,
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        list_tasks_query::ListTasksQuery,
        my_tasks_response::MyTasksResponse,
        project_option::ProjectOption,
        task_counts::TaskCounts,
        task_dto::TaskDto,
        task_filters_dto::TaskFiltersDto,
        task_form_response::TaskFormResponse,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        task_saved_response::TaskSavedResponse,
        tasks::{
            create_task, create_task_form, delete_task, delete_task_confirm, edit_task_form,
            get_task, list_tasks, my_tasks, toggle_task, update_task,
        },
        update_task_request::UpdateTaskRequest,
    },
    toggle_response::ToggleResponse,
    validation::{
        FormValidator, local_path_or, non_blank, parse_due_date, parse_optional_id,
        parse_path_id,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
