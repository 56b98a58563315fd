//! Task REST API handlers
//!
//! Every handler is scoped to the caller's profile. A task owned by someone
//! else answers exactly like a missing one.

use crate::{
    ActionResponse, ApiError, ApiResult, AppState, Choice, CreateTaskRequest, CurrentProfile,
    FormValidator, ListTasksQuery, MyTasksResponse, ProjectOption, TaskCounts, TaskDto,
    TaskFiltersDto, TaskFormResponse, TaskListResponse, TaskResponse, TaskSavedResponse,
    ToggleResponse, UpdateTaskRequest, non_blank, parse_due_date, parse_optional_id,
    parse_path_id,
};

use tf_core::{Priority, Task, analytics::WeeklySeries};
use tf_db::{
    CompletionFilter, ProjectFilter, ProjectRepository, TaskFilter, TaskRepository, TaskSort,
};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

const TASKS_PAGE: &str = "/tasks";
const MY_TASKS_LIMIT: i64 = 5;
const TOGGLE_NOT_FOUND: &str = "Task not found or you do not have permission";

// =============================================================================
// Handlers
// =============================================================================

/// GET /tasks
///
/// Filtered, sorted listing plus counts over the filtered set
pub async fn list_tasks(
    State(state): State<AppState>,
    current: CurrentProfile,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let owner_id = current.profile.id;
    let (filter, status) = task_filter(&query)?;
    let sort = query
        .sort
        .as_deref()
        .and_then(|s| TaskSort::parse(s.trim()))
        .unwrap_or_default();

    let tasks = TaskRepository::list(&state.pool, owner_id, &filter, sort).await?;
    let all_tasks = TaskRepository::list_for_owner(&state.pool, owner_id).await?;
    let window = state.reporting_window();

    Ok(Json(TaskListResponse {
        counts: TaskCounts::from_tasks(&tasks),
        tasks: TaskDto::from_tasks(&tasks, window.today()),
        filters: TaskFiltersDto {
            status,
            priority: filter.priority.map(|p| p.as_str().to_string()),
            project_id: filter.project_id.map(|id| id.to_string()),
            search: filter.search,
            sort: sort.as_param(),
        },
        projects: project_options(&state, owner_id).await?,
        priority_choices: Choice::priorities(),
        weekly: WeeklySeries::build(&all_tasks, &window),
    }))
}

/// GET /tasks/my-tasks
///
/// The most recent pending and completed tasks
pub async fn my_tasks(
    State(state): State<AppState>,
    current: CurrentProfile,
) -> ApiResult<Json<MyTasksResponse>> {
    let owner_id = current.profile.id;
    let today = state.reporting_window().today();

    let pending =
        TaskRepository::recent_by_completion(&state.pool, owner_id, false, MY_TASKS_LIMIT).await?;
    let completed =
        TaskRepository::recent_by_completion(&state.pool, owner_id, true, MY_TASKS_LIMIT).await?;

    Ok(Json(MyTasksResponse {
        pending: TaskDto::from_tasks(&pending, today),
        completed: TaskDto::from_tasks(&completed, today),
    }))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task = owned_task(&state, &id, current.profile.id).await?;
    task_response(&state, &task, current.profile.id).await.map(Json)
}

/// GET /tasks/create
pub async fn create_task_form(
    State(state): State<AppState>,
    current: CurrentProfile,
) -> ApiResult<Json<TaskFormResponse>> {
    Ok(Json(TaskFormResponse {
        task: None,
        projects: project_options(&state, current.profile.id).await?,
        priority_choices: Choice::priorities(),
    }))
}

/// POST /tasks/create
pub async fn create_task(
    State(state): State<AppState>,
    current: CurrentProfile,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskSavedResponse>)> {
    let limits = &state.config.validation;
    let title = req.title.trim();

    let mut form = FormValidator::new();
    form.title(title, limits, "Task");
    if let Some(description) = &req.description {
        form.description(description, limits);
    }
    form.finish()?;

    let priority = match non_blank(req.priority.as_deref()) {
        Some(p) => Priority::from_str(&p)?,
        None => Priority::default(),
    };
    let due_date = parse_due_date(req.due_date.as_deref())?;
    let project_id =
        accessible_project_id(&state, current.profile.id, req.project_id.as_deref()).await?;

    let mut task = Task::new(current.profile.id, title.to_string());
    task.description = non_blank(req.description.as_deref());
    task.priority = priority;
    task.due_date = due_date;
    task.project_id = project_id;

    TaskRepository::create(&state.pool, &task).await?;

    log::debug!("{} created task {}", current.identity.username, task.id);

    let today = state.reporting_window().today();
    Ok((
        StatusCode::CREATED,
        Json(TaskSavedResponse {
            success: true,
            message: format!("Task '{}' created successfully!", task.title),
            redirect_to: format!("{TASKS_PAGE}/{}", task.id),
            task: TaskDto::from_task(&task, today),
        }),
    ))
}

/// GET /tasks/{id}/edit
pub async fn edit_task_form(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskFormResponse>> {
    let task = owned_task(&state, &id, current.profile.id).await?;
    let today = state.reporting_window().today();

    Ok(Json(TaskFormResponse {
        task: Some(TaskDto::from_task(&task, today)),
        projects: project_options(&state, current.profile.id).await?,
        priority_choices: Choice::priorities(),
    }))
}

/// POST /tasks/{id}/edit
pub async fn update_task(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskSavedResponse>> {
    let mut task = owned_task(&state, &id, current.profile.id).await?;
    let limits = &state.config.validation;

    let mut form = FormValidator::new();
    if let Some(title) = req.title.as_deref().map(str::trim) {
        form.title(title, limits, "Task");
    }
    if let Some(description) = &req.description {
        form.description(description, limits);
    }
    form.finish()?;

    let now = Utc::now();
    if let Some(title) = &req.title {
        task.title = title.trim().to_string();
    }
    if let Some(description) = &req.description {
        task.description = non_blank(Some(description));
    }
    if let Some(priority) = &req.priority {
        task.priority = Priority::from_str(priority.trim())?;
    }
    if req.due_date.is_some() {
        task.due_date = parse_due_date(req.due_date.as_deref())?;
    }
    if req.project_id.is_some() {
        task.project_id =
            accessible_project_id(&state, current.profile.id, req.project_id.as_deref()).await?;
    }
    if let Some(completed) = req.completed {
        task.set_completed(completed, now);
    }
    task.updated_at = now;

    if !TaskRepository::update(&state.pool, &task).await? {
        return Err(task_not_found());
    }

    let today = state.reporting_window().today();
    Ok(Json(TaskSavedResponse {
        success: true,
        message: format!("Task '{}' updated successfully!", task.title),
        redirect_to: format!("{TASKS_PAGE}/{}", task.id),
        task: TaskDto::from_task(&task, today),
    }))
}

/// GET /tasks/{id}/delete
///
/// Confirmation view; deletes nothing
pub async fn delete_task_confirm(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task = owned_task(&state, &id, current.profile.id).await?;
    task_response(&state, &task, current.profile.id).await.map(Json)
}

/// POST /tasks/{id}/delete
pub async fn delete_task(
    State(state): State<AppState>,
    current: CurrentProfile,
    Path(id): Path<String>,
) -> ApiResult<Json<ActionResponse>> {
    let task = owned_task(&state, &id, current.profile.id).await?;

    if !TaskRepository::delete(&state.pool, task.id, current.profile.id).await? {
        return Err(task_not_found());
    }

    log::debug!("{} deleted task {}", current.identity.username, task.id);

    Ok(Json(ActionResponse::ok(
        format!("Task '{}' deleted successfully!", task.title),
        TASKS_PAGE,
    )))
}

/// POST /tasks/{id}/toggle
///
/// Flips completion in one transaction. Unknown and foreign tasks answer
/// 404 with `success: false` in the toggle body shape.
pub async fn toggle_task(
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

    let Ok(task_id) = Uuid::parse_str(&id) else {
        return Ok(not_found());
    };

    let mut tx = state.pool.begin().await?;
    let Some(mut task) = TaskRepository::find_owned(&mut *tx, task_id, current.profile.id).await?
    else {
        return Ok(not_found());
    };

    let completed = task.toggle(Utc::now());
    TaskRepository::update(&mut *tx, &task).await?;
    tx.commit().await?;

    let state_label = if completed { "completed" } else { "pending" };
    Ok((
        StatusCode::OK,
        Json(ToggleResponse {
            success: true,
            completed: Some(completed),
            message: format!("Task marked as {state_label}"),
        }),
    ))
}

// =============================================================================
// Helpers
// =============================================================================

fn task_not_found() -> ApiError {
    ApiError::not_found("Task not found", TASKS_PAGE)
}

async fn owned_task(state: &AppState, raw_id: &str, owner_id: Uuid) -> ApiResult<Task> {
    let task_id = parse_path_id(raw_id, "Task", TASKS_PAGE)?;
    TaskRepository::find_owned(&state.pool, task_id, owner_id)
        .await?
        .ok_or_else(task_not_found)
}

async fn task_response(state: &AppState, task: &Task, profile_id: Uuid) -> ApiResult<TaskResponse> {
    let project = match task.project_id {
        Some(project_id) => {
            ProjectRepository::find_accessible(&state.pool, project_id, profile_id)
                .await?
                .map(|(project, _)| ProjectOption::from(&project))
        }
        None => None,
    };

    Ok(TaskResponse {
        task: TaskDto::from_task(task, state.reporting_window().today()),
        project,
    })
}

async fn project_options(state: &AppState, profile_id: Uuid) -> ApiResult<Vec<ProjectOption>> {
    let projects =
        ProjectRepository::list_accessible(&state.pool, profile_id, &ProjectFilter::default())
            .await?;
    Ok(projects
        .iter()
        .map(|summary| ProjectOption::from(&summary.project))
        .collect())
}

/// A task may only point at a project its owner can access
async fn accessible_project_id(
    state: &AppState,
    profile_id: Uuid,
    raw: Option<&str>,
) -> ApiResult<Option<Uuid>> {
    let Some(project_id) = parse_optional_id(raw, "project_id")? else {
        return Ok(None);
    };

    match ProjectRepository::find_accessible(&state.pool, project_id, profile_id).await? {
        Some(_) => Ok(Some(project_id)),
        None => Err(ApiError::validation(
            "project_id",
            "Select a project you own or are a member of",
        )),
    }
}

/// Status is echoed back as `completed`, `incomplete` or `any`
fn task_filter(query: &ListTasksQuery) -> ApiResult<(TaskFilter, &'static str)> {
    let (completion, status) = match non_blank(query.status.as_deref()).as_deref() {
        None | Some("any") | Some("all") => (CompletionFilter::Any, "any"),
        Some("completed") => (CompletionFilter::Completed, "completed"),
        Some("incomplete") | Some("pending") => (CompletionFilter::Incomplete, "incomplete"),
        Some(other) => {
            return Err(ApiError::validation(
                "status",
                format!("'{other}' is not a valid status"),
            ));
        }
    };

    let priority = match non_blank(query.priority.as_deref()).as_deref() {
        None | Some("any") | Some("all") => None,
        Some(p) => Some(Priority::from_str(p)?),
    };

    Ok((
        TaskFilter {
            completion,
            priority,
            project_id: parse_optional_id(query.project_id.as_deref(), "project_id")?,
            search: non_blank(query.search.as_deref()),
        },
        status,
    ))
}
