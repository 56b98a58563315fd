use tf_core::{Identity, Priority, Profile, Project, Task};
use tf_db::{IdentityRepository, ProfileRepository, ProjectRepository, TaskRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Inserts an identity and its profile
pub async fn create_test_account(pool: &SqlitePool, username: &str) -> (Identity, Profile) {
    let identity = Identity::new(
        username.to_string(),
        format!("{username}@example.com"),
        "not-a-real-hash".to_string(),
    );
    let profile = Profile::new(identity.id);

    IdentityRepository::create(pool, &identity)
        .await
        .expect("Failed to create identity");
    ProfileRepository::create(pool, &profile)
        .await
        .expect("Failed to create profile");

    (identity, profile)
}

pub async fn create_test_task(pool: &SqlitePool, owner_id: Uuid, title: &str, priority: Priority) -> Task {
    let mut task = Task::new(owner_id, title.to_string());
    task.priority = priority;
    TaskRepository::create(pool, &task)
        .await
        .expect("Failed to create task");
    task
}

pub async fn create_test_project(pool: &SqlitePool, owner_id: Uuid, title: &str) -> Project {
    let project = Project::new(owner_id, title.to_string());
    ProjectRepository::create(pool, &project)
        .await
        .expect("Failed to create project");
    project
}
