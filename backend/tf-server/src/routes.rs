use crate::{
    AppState, analytics, calendar, change_password, check_username, create_project,
    create_project_form, create_task, create_task_form, dashboard, delete_project,
    delete_project_confirm, delete_task, delete_task_confirm, edit_project_form, edit_task_form,
    get_profile, get_project, get_task, health, list_members, list_projects, list_tasks, login,
    login_page, logout, manage_members, my_tasks, reports, signup, signup_page, toggle_project,
    toggle_task, update_profile, update_project, update_task, update_widget,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Accounts
        .route("/login", get(login_page).post(login))
        .route("/signup", get(signup_page).post(signup))
        .route("/logout", post(logout))
        .route("/check-username", get(check_username))
        .route("/profile", get(get_profile).post(update_profile))
        .route("/change-password", post(change_password))
        // Tasks
        .route("/tasks", get(list_tasks))
        .route("/tasks/my-tasks", get(my_tasks))
        .route("/tasks/create", get(create_task_form).post(create_task))
        .route("/tasks/{id}", get(get_task))
        .route("/tasks/{id}/edit", get(edit_task_form).post(update_task))
        .route("/tasks/{id}/delete", get(delete_task_confirm).post(delete_task))
        .route("/tasks/{id}/toggle", post(toggle_task))
        // Projects
        .route("/projects", get(list_projects))
        .route("/projects/create", get(create_project_form).post(create_project))
        .route("/projects/{id}", get(get_project))
        .route("/projects/{id}/edit", get(edit_project_form).post(update_project))
        .route(
            "/projects/{id}/delete",
            get(delete_project_confirm).post(delete_project),
        )
        .route("/projects/{id}/members", get(list_members).post(manage_members))
        .route("/projects/{id}/toggle", post(toggle_project))
        // Dashboard
        .route("/dashboard", get(dashboard))
        .route("/dashboard/analytics", get(analytics))
        .route("/dashboard/reports", get(reports))
        .route("/dashboard/calendar", get(calendar))
        .route("/dashboard/widgets", post(update_widget))
        // Add shared state
        .with_state(state)
        .layer(cors)
}

/// Configured origins, or any origin when none are listed
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
