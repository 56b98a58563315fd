//! Project REST API handlers
//!
//! Owners and members can read a project and toggle its completion; editing,
//! deleting and member management are owner-only. Anything the caller may not
//! do answers as not found.

use crate::{
    ActionResponse, ApiError, ApiResult, AppState, Choice, CreateProjectRequest, CurrentProfile,
    FormValidator, ListProjectsQuery, MemberActionRequest, MemberDto, MembersResponse,
    ProjectDetailQuery, ProjectDetailResponse, ProjectFormResponse, ProjectListResponse,
    ProjectResponse, ProjectSavedResponse, ProjectSummaryDto, TaskDto, ToggleResponse,
    UpdateProjectRequest, non_blank, parse_optional_id, parse_path_id,
};

use tf_core::{Permission, Project, ProjectColor, ProjectRole};
use tf_db::{
    CompletionFilter, ProfileRepository, ProjectFilter, ProjectMemberRepository,
    ProjectRepository, ProjectStatusFilter, TaskRepository,
};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

const PROJECTS_PAGE: &str = "/projects";
const TOGGLE_NOT_FOUND: &str = "Project not found or you do not have permission";

// =============================================================================
// Handlers
// =============================================================================

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
    current: CurrentProfile,
    Query(query): Query<ListProjectsQuery>,
) -> ApiResult<Json<ProjectListResponse>> {
    let (status_filter, status) = match non_blank(query.status.as_deref()).as_deref() {
        None | Some("any") | Some("all") => (ProjectStatusFilter::Any, "any"),
        Some("completed") => (ProjectStatusFilter::Completed, "completed"),
        Some("active") => (ProjectStatusFilter::Active, "active"),
        Some(other) => {
            return Err(ApiError::validation(
                "status",
                format!("'{other}' is not a valid status"),
            ));
        }
    };
    let filter = ProjectFilter {
        status: status_filter,
        search: non_blank(query.search.as_deref()),
    };

    let viewer_id = current.profile.id;
    let projects = ProjectRepository::list_accessible(&state.pool, viewer_id, &filter).await?;

    Ok(Json(ProjectListResponse {
        projects: projects
            .into_iter()
            .map(|summary| ProjectSummaryDto::from_summary(summary, viewer_id))
            .collect(),
        status,
        search: filter.search,
    }))
}

/// GET /projects/{id}
///
/// Lists the project's tasks from every owner, optionally filtered by status
pub async fn get_project(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
    Query(query): Query<ProjectDetailQuery>,
) -> ApiResult<Json<ProjectDetailResponse>> {
    let (project, role) = project_with(&state, &id, current.profile.id, Permission::View).await?;

    let (completion, status) = match non_blank(query.status.as_deref()).as_deref() {
        Some("completed") => (CompletionFilter::Completed, "completed"),
        Some("active") => (CompletionFilter::Incomplete, "active"),
        _ => (CompletionFilter::Any, "any"),
    };

    let tasks = TaskRepository::list_by_project(&state.pool, project.id, completion).await?;
    let members = ProjectMemberRepository::new(state.pool.clone())
        .list_members(project.id)
        .await?;
    let today = state.reporting_window().today();

    Ok(Json(ProjectDetailResponse {
        project: project.into(),
        tasks: TaskDto::from_tasks(&tasks, today),
        members: members.into_iter().map(MemberDto::from).collect(),
        is_owner: role == ProjectRole::Owner,
        status,
    }))
}

/// GET /projects/create
pub async fn create_project_form(_current: CurrentProfile) -> Json<ProjectFormResponse> {
    Json(ProjectFormResponse {
        project: None,
        color_choices: Choice::colors(),
    })
}

/// POST /projects/create
pub async fn create_project(
    State(state): State<AppState>,
    current: CurrentProfile,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectSavedResponse>)> {
    let limits = &state.config.validation;
    let title = req.title.trim();

    let mut form = FormValidator::new();
    form.title(title, limits, "Project");
    if let Some(description) = &req.description {
        form.description(description, limits);
    }
    form.finish()?;

    let color = match non_blank(req.color.as_deref()) {
        Some(c) => ProjectColor::from_str(&c)?,
        None => ProjectColor::default(),
    };

    let mut project = Project::new(current.profile.id, title.to_string());
    project.description = non_blank(req.description.as_deref());
    project.color = color;

    ProjectRepository::create(&state.pool, &project).await?;

    log::debug!("{} created project {}", current.identity.username, project.id);

    Ok((
        StatusCode::CREATED,
        Json(ProjectSavedResponse {
            success: true,
            message: format!("Project '{}' created successfully!", project.title),
            redirect_to: format!("{PROJECTS_PAGE}/{}", project.id),
            project: project.into(),
        }),
    ))
}

/// GET /projects/{id}/edit
pub async fn edit_project_form(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectFormResponse>> {
    let (project, _) = project_with(&state, &id, current.profile.id, Permission::Edit).await?;

    Ok(Json(ProjectFormResponse {
        project: Some(project.into()),
        color_choices: Choice::colors(),
    }))
}

/// POST /projects/{id}/edit
pub async fn update_project(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectSavedResponse>> {
    let (mut project, _) =
        project_with(&state, &id, current.profile.id, Permission::Edit).await?;
    let limits = &state.config.validation;

    let mut form = FormValidator::new();
    if let Some(title) = req.title.as_deref().map(str::trim) {
        form.title(title, limits, "Project");
    }
    if let Some(description) = &req.description {
        form.description(description, limits);
    }
    form.finish()?;

    if let Some(title) = &req.title {
        project.title = title.trim().to_string();
    }
    if let Some(description) = &req.description {
        project.description = non_blank(Some(description));
    }
    if let Some(color) = &req.color {
        project.color = ProjectColor::from_str(color.trim())?;
    }
    if let Some(completed) = req.completed {
        project.completed = completed;
    }
    project.updated_at = Utc::now();

    if !ProjectRepository::update(&state.pool, &project).await? {
        return Err(project_not_found());
    }

    Ok(Json(ProjectSavedResponse {
        success: true,
        message: format!("Project '{}' updated successfully!", project.title),
        redirect_to: format!("{PROJECTS_PAGE}/{}", project.id),
        project: project.into(),
    }))
}

/// GET /projects/{id}/delete
///
/// Confirmation view; deletes nothing
pub async fn delete_project_confirm(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let (project, _) = project_with(&state, &id, current.profile.id, Permission::Edit).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// POST /projects/{id}/delete
///
/// Tasks of the project survive, detached from it
pub async fn delete_project(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<Json<ActionResponse>> {
    let (project, _) = project_with(&state, &id, current.profile.id, Permission::Edit).await?;

    if !ProjectRepository::delete(&state.pool, project.id, current.profile.id).await? {
        return Err(project_not_found());
    }

    log::debug!("{} deleted project {}", current.identity.username, project.id);

    Ok(Json(ActionResponse::ok(
        format!("Project '{}' deleted successfully!", project.title),
        PROJECTS_PAGE,
    )))
}

/// GET /projects/{id}/members
pub async fn list_members(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<Json<MembersResponse>> {
    let (project, _) =
        project_with(&state, &id, current.profile.id, Permission::ManageMembers).await?;

    members_response(&state, project, None).await.map(Json)
}

/// POST /projects/{id}/members
///
/// Adding and removing are both idempotent
pub async fn manage_members(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
    Json(req): Json<MemberActionRequest>,
) -> ApiResult<Json<MembersResponse>> {
    let (project, _) =
        project_with(&state, &id, current.profile.id, Permission::ManageMembers).await?;
    let members = ProjectMemberRepository::new(state.pool.clone());
    let members_page = format!("{PROJECTS_PAGE}/{}/members", project.id);

    let message = match req.action.trim() {
        "add" => {
            let email = non_blank(req.email.as_deref())
                .ok_or_else(|| ApiError::validation("email", "Email is required"))?;
            let Some(profile) = ProfileRepository::find_by_email(&state.pool, &email).await? else {
                return Err(ApiError::not_found(
                    format!("No user found with email {email}"),
                    &members_page,
                ));
            };
            if profile.id == project.owner_id {
                return Err(ApiError::validation(
                    "email",
                    "You are already the owner of this project.",
                ));
            }

            if members.add(project.id, profile.id).await? {
                log::debug!("Added {} to project {}", email, project.id);
            }
            format!("{email} is now a member of this project")
        }
        "remove" => {
            let member_id = parse_optional_id(req.member_id.as_deref(), "member_id")?
                .ok_or_else(|| ApiError::validation("member_id", "Member is required"))?;

            if members.remove(project.id, member_id).await? {
                log::debug!("Removed {} from project {}", member_id, project.id);
            }
            "Member removed from this project".to_string()
        }
        other => {
            return Err(ApiError::validation(
                "action",
                format!("'{other}' is not a valid action; use add or remove"),
            ));
        }
    };

    members_response(&state, project, Some(message)).await.map(Json)
}

/// POST /projects/{id}/toggle
///
/// Owners and members alike. Unknown and inaccessible projects answer 404
/// with `success: false` in the toggle body shape.
pub async fn toggle_project(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<ToggleResponse>)> {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(ToggleResponse {
                success: false,
                completed: None,
                message: TOGGLE_NOT_FOUND.to_string(),
            }),
        )
    };

    let Ok(project_id) = Uuid::parse_str(&id) else {
        return Ok(not_found());
    };

    let mut tx = state.pool.begin().await?;
    let accessible =
        ProjectRepository::find_accessible(&mut *tx, project_id, current.profile.id).await?;
    let Some((mut project, role)) = accessible else {
        return Ok(not_found());
    };
    if !role.has_permission(Permission::ToggleCompletion) {
        return Ok(not_found());
    }

    let completed = project.toggle(Utc::now());
    ProjectRepository::set_completed(&mut *tx, &project).await?;
    tx.commit().await?;

    let state_label = if completed { "completed" } else { "active" };
    Ok((
        StatusCode::OK,
        Json(ToggleResponse {
            success: true,
            completed: Some(completed),
            message: format!("Project marked as {state_label}"),
        }),
    ))
}

// =============================================================================
// Helpers
// =============================================================================

fn project_not_found() -> ApiError {
    ApiError::not_found("Project not found", PROJECTS_PAGE)
}

/// The project and the caller's role, when the role grants `required`
async fn project_with(
    state: &AppState,
    raw_id: &str,
    profile_id: Uuid,
    required: Permission,
) -> ApiResult<(Project, ProjectRole)> {
    let project_id = parse_path_id(raw_id, "Project", PROJECTS_PAGE)?;

    match ProjectRepository::find_accessible(&state.pool, project_id, profile_id).await? {
        Some((project, role)) if role.has_permission(required) => Ok((project, role)),
        Some((project, role)) => {
            log::debug!(
                "{:?} of project {} lacks {:?} permission",
                role,
                project.id,
                required
            );
            Err(project_not_found())
        }
        None => Err(project_not_found()),
    }
}

async fn members_response(
    state: &AppState,
    project: Project,
    message: Option<String>,
) -> ApiResult<MembersResponse> {
    let members = ProjectMemberRepository::new(state.pool.clone())
        .list_members(project.id)
        .await?;

    Ok(MembersResponse {
        project: project.into(),
        members: members.into_iter().map(MemberDto::from).collect(),
        message,
    })
}
