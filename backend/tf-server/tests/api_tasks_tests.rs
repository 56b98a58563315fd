//! Integration tests for task handlers
mod common;

use crate::common::{TestUser, create_test_app_state, create_test_user, get, post};

use tf_server::AppState;

use axum::http::StatusCode;
use googletest::prelude::*;
use serde_json::{Value, json};

async fn create_task(state: &AppState, user: &TestUser, body: Value) -> String {
    let response = post(state, "/tasks/create", user, body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.json);
    response.json["task"]["id"].as_str().unwrap().to_string()
}

fn titles(json: &Value) -> Vec<String> {
    json["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn given_valid_task_when_creating_then_defaults_applied_and_readable() {
    // Given
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "tasker", true).await;

    // When
    let response = post(
        &state,
        "/tasks/create",
        &user,
        json!({"title": "  Write docs  ", "due_date": "2030-01-15"}),
    )
    .await;

    // Then
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json["success"], true);
    assert_eq!(response.json["message"], "Task 'Write docs' created successfully!");
    let id = response.json["task"]["id"].as_str().unwrap();
    assert_eq!(response.json["redirect_to"], format!("/tasks/{id}"));
    assert_eq!(response.json["task"]["priority"], "medium");
    assert_eq!(response.json["task"]["due_date"], "2030-01-15");
    assert_eq!(response.json["task"]["completed"], false);

    let detail = get(&state, &format!("/tasks/{id}"), &user).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.json["task"]["title"], "Write docs");
    assert!(detail.json["project"].is_null());
}

#[tokio::test]
async fn given_blank_title_when_creating_then_validation_error() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "blank", true).await;

    let response = post(&state, "/tasks/create", &user, json!({"title": "   "})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["field"], "title");
    assert_eq!(response.json["error"]["message"], "Task title is required");
}

#[tokio::test]
async fn given_bad_priority_or_date_when_creating_then_field_errors() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "picky", true).await;

    let priority = post(
        &state,
        "/tasks/create",
        &user,
        json!({"title": "A", "priority": "urgent"}),
    )
    .await;
    let date = post(
        &state,
        "/tasks/create",
        &user,
        json!({"title": "A", "due_date": "tomorrow"}),
    )
    .await;

    assert_eq!(priority.status, StatusCode::BAD_REQUEST);
    assert_eq!(priority.json["error"]["field"], "priority");
    assert_eq!(date.status, StatusCode::BAD_REQUEST);
    assert_eq!(date.json["error"]["field"], "due_date");
}

#[tokio::test]
async fn given_foreign_project_when_creating_task_then_project_rejected() {
    // Given
    let state = create_test_app_state().await;
    let owner = create_test_user(&state, "owner", true).await;
    let stranger = create_test_user(&state, "stranger", true).await;
    let project = post(
        &state,
        "/projects/create",
        &owner,
        json!({"title": "Private", "color": "green"}),
    )
    .await;
    let project_id = project.json["project"]["id"].as_str().unwrap().to_string();

    // When
    let response = post(
        &state,
        "/tasks/create",
        &stranger,
        json!({"title": "Sneaky", "project_id": project_id}),
    )
    .await;

    // Then
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["field"], "project_id");
}

#[tokio::test]
async fn given_other_users_task_when_accessing_then_same_as_missing() {
    // Given
    let state = create_test_app_state().await;
    let alice = create_test_user(&state, "alice", true).await;
    let bob = create_test_user(&state, "bob", true).await;
    let task_id = create_task(&state, &alice, json!({"title": "Alice only"})).await;

    // When
    let foreign = get(&state, &format!("/tasks/{task_id}"), &bob).await;
    let missing = get(
        &state,
        "/tasks/00000000-0000-4000-8000-000000000000",
        &bob,
    )
    .await;
    let malformed = get(&state, "/tasks/not-a-uuid", &bob).await;
    let edit = post(
        &state,
        &format!("/tasks/{task_id}/edit"),
        &bob,
        json!({"title": "Mine now"}),
    )
    .await;
    let delete = post(&state, &format!("/tasks/{task_id}/delete"), &bob, json!({})).await;

    // Then
    for response in [&foreign, &missing, &malformed, &edit, &delete] {
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.json["error"]["message"], "Task not found");
        assert_eq!(response.json["error"]["redirect_to"], "/tasks");
    }
    let still_there = get(&state, &format!("/tasks/{task_id}"), &alice).await;
    assert_eq!(still_there.json["task"]["title"], "Alice only");
}

#[tokio::test]
async fn given_task_when_toggled_twice_then_back_to_pending() {
    // Given
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "toggler", true).await;
    let task_id = create_task(&state, &user, json!({"title": "Flip"})).await;
    let uri = format!("/tasks/{task_id}/toggle");

    // When
    let first = post(&state, &uri, &user, json!({})).await;
    let after_first = get(&state, &format!("/tasks/{task_id}"), &user).await;
    let second = post(&state, &uri, &user, json!({})).await;
    let after_second = get(&state, &format!("/tasks/{task_id}"), &user).await;

    // Then
    assert_eq!(first.json["completed"], true);
    assert_eq!(first.json["message"], "Task marked as completed");
    assert!(after_first.json["task"]["completed_at"].is_i64());
    assert_eq!(second.json["completed"], false);
    assert_eq!(second.json["message"], "Task marked as pending");
    assert!(after_second.json["task"]["completed_at"].is_null());
}

#[tokio::test]
async fn given_foreign_task_when_toggling_then_not_found_body() {
    let state = create_test_app_state().await;
    let alice = create_test_user(&state, "alice2", true).await;
    let bob = create_test_user(&state, "bob2", true).await;
    let task_id = create_task(&state, &alice, json!({"title": "Hands off"})).await;

    let response = post(&state, &format!("/tasks/{task_id}/toggle"), &bob, json!({})).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["success"], false);
    assert_eq!(
        response.json["message"],
        "Task not found or you do not have permission"
    );
    assert!(response.json.get("completed").is_none());
}

#[tokio::test]
async fn given_partial_update_when_saving_then_only_given_fields_change() {
    // Given
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "updater", true).await;
    let task_id = create_task(
        &state,
        &user,
        json!({"title": "Draft", "description": "first pass", "priority": "low", "due_date": "2030-02-01"}),
    )
    .await;

    // When
    let response = post(
        &state,
        &format!("/tasks/{task_id}/edit"),
        &user,
        json!({"priority": "high", "due_date": ""}),
    )
    .await;

    // Then
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["message"], "Task 'Draft' updated successfully!");
    let task = &response.json["task"];
    assert_eq!(task["title"], "Draft");
    assert_eq!(task["description"], "first pass");
    assert_eq!(task["priority"], "high");
    assert!(task["due_date"].is_null());
}

#[tokio::test]
async fn given_task_when_deleted_then_gone() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "deleter", true).await;
    let task_id = create_task(&state, &user, json!({"title": "Temporary"})).await;

    let confirm = get(&state, &format!("/tasks/{task_id}/delete"), &user).await;
    let deleted = post(&state, &format!("/tasks/{task_id}/delete"), &user, json!({})).await;
    let after = get(&state, &format!("/tasks/{task_id}"), &user).await;

    assert_eq!(confirm.status, StatusCode::OK);
    assert_eq!(confirm.json["task"]["title"], "Temporary");
    assert_eq!(deleted.json["message"], "Task 'Temporary' deleted successfully!");
    assert_eq!(deleted.json["redirect_to"], "/tasks");
    assert_eq!(after.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_mixed_tasks_when_filtering_then_matching_subset_and_counts() {
    // Given
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "filterer", true).await;
    let _ = create_task(&state, &user, json!({"title": "Buy milk", "priority": "low"})).await;
    let report = create_task(
        &state,
        &user,
        json!({"title": "Quarterly report", "priority": "high", "description": "numbers for MILK board"}),
    )
    .await;
    let _ = create_task(&state, &user, json!({"title": "Call plumber", "priority": "high"})).await;
    post(&state, &format!("/tasks/{report}/toggle"), &user, json!({})).await;

    // When
    let high_pending = get(&state, "/tasks?priority=high&status=incomplete", &user).await;
    let search = get(&state, "/tasks?search=milk", &user).await;
    let completed = get(&state, "/tasks?status=completed", &user).await;

    // Then
    assert_eq!(high_pending.status, StatusCode::OK);
    assert_that!(titles(&high_pending.json), elements_are![eq("Call plumber")]);
    assert_eq!(high_pending.json["filters"]["status"], "incomplete");
    assert_eq!(high_pending.json["filters"]["priority"], "high");
    assert_eq!(high_pending.json["counts"]["total"], 1);

    assert_that!(
        titles(&search.json),
        unordered_elements_are![eq("Buy milk"), eq("Quarterly report")]
    );

    assert_that!(titles(&completed.json), elements_are![eq("Quarterly report")]);
    assert_eq!(completed.json["counts"]["completed"], 1);
    assert_eq!(completed.json["counts"]["high"], 1);
}

#[tokio::test]
async fn given_tasks_when_sorting_by_priority_then_semantic_order() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "sorter", true).await;
    for (title, priority) in [("M", "medium"), ("H", "high"), ("L", "low")] {
        create_task(&state, &user, json!({"title": title, "priority": priority})).await;
    }

    let descending = get(&state, "/tasks?sort=-priority", &user).await;
    let ascending = get(&state, "/tasks?sort=priority", &user).await;
    let unknown = get(&state, "/tasks?sort=colour", &user).await;

    assert_that!(titles(&descending.json), elements_are![eq("H"), eq("M"), eq("L")]);
    assert_that!(titles(&ascending.json), elements_are![eq("L"), eq("M"), eq("H")]);
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(unknown.json["filters"]["sort"], "-created_at");
}

#[tokio::test]
async fn given_tasks_when_sorting_by_due_date_then_undated_last() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "dater", true).await;
    create_task(&state, &user, json!({"title": "None"})).await;
    create_task(&state, &user, json!({"title": "Later", "due_date": "2031-06-01"})).await;
    create_task(&state, &user, json!({"title": "Sooner", "due_date": "2030-06-01"})).await;

    let ascending = get(&state, "/tasks?sort=due_date", &user).await;
    let descending = get(&state, "/tasks?sort=-due_date", &user).await;

    assert_that!(
        titles(&ascending.json),
        elements_are![eq("Sooner"), eq("Later"), eq("None")]
    );
    assert_that!(
        titles(&descending.json),
        elements_are![eq("Later"), eq("Sooner"), eq("None")]
    );
}

#[tokio::test]
async fn test_unknown_status_filter_is_validation_error() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "strict", true).await;

    let response = get(&state, "/tasks?status=archived", &user).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"]["field"], "status");
}

#[tokio::test]
async fn given_many_tasks_when_opening_my_tasks_then_five_of_each() {
    // Given
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "busy", true).await;
    for i in 0..7 {
        let id = create_task(&state, &user, json!({"title": format!("Task {i}")})).await;
        if i < 6 {
            post(&state, &format!("/tasks/{id}/toggle"), &user, json!({})).await;
        }
    }

    // When
    let response = get(&state, "/tasks/my-tasks", &user).await;

    // Then
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["pending"].as_array().unwrap().len(), 1);
    assert_eq!(response.json["completed"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_form_lists_priority_choices() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state, "former", true).await;

    let response = get(&state, "/tasks/create", &user).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json["task"].is_null());
    let values: Vec<&str> = response.json["priority_choices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["value"].as_str().unwrap())
        .collect();
    assert_that!(values, elements_are![eq(&"low"), eq(&"medium"), eq(&"high")]);
}
