use crate::repositories::task_filter::{CompletionFilter, SearchTerm, TaskFilter, TaskSort};
use crate::{Result as DbErrorResult, decode};

use tf_core::Task;

use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

const TASK_SELECT: &str = r#"
    SELECT
        id, owner_id, project_id, title, description, completed, completed_at,
        priority, due_date, created_at, updated_at,
        CASE priority WHEN 'high' THEN 2 WHEN 'medium' THEN 1 ELSE 0 END AS priority_rank
    FROM tf_tasks
"#;

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    owner_id: String,
    project_id: Option<String>,
    title: String,
    description: Option<String>,
    completed: bool,
    completed_at: Option<i64>,
    priority: String,
    due_date: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = crate::DbError;

    fn try_from(r: TaskRow) -> DbErrorResult<Self> {
        Ok(Task {
            id: decode::uuid(&r.id, "task.id")?,
            owner_id: decode::uuid(&r.owner_id, "task.owner_id")?,
            project_id: decode::optional_uuid(r.project_id.as_deref(), "task.project_id")?,
            title: r.title,
            description: r.description,
            completed: r.completed,
            completed_at: decode::optional_timestamp(r.completed_at, "task.completed_at")?,
            priority: decode::parsed(&r.priority, "task.priority")?,
            due_date: decode::optional_date(r.due_date.as_deref(), "task.due_date")?,
            created_at: decode::timestamp(r.created_at, "task.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "task.updated_at")?,
        })
    }
}

fn into_tasks(rows: Vec<TaskRow>) -> DbErrorResult<Vec<Task>> {
    rows.into_iter().map(Task::try_from).collect()
}

/// Every query except `list_by_project` is scoped to the owning profile.
pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO tf_tasks (
                id, owner_id, project_id, title, description, completed, completed_at,
                priority, due_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.owner_id.to_string())
        .bind(task.project_id.map(|id| id.to_string()))
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(task.completed_at.map(|t| t.timestamp()))
        .bind(task.priority.as_str())
        .bind(decode::format_date(task.due_date))
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// `None` both when the task does not exist and when another profile owns it
    pub async fn find_owned<'e, E>(executor: E, id: Uuid, owner_id: Uuid) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{TASK_SELECT} WHERE id = ? AND owner_id = ?");
        sqlx::query_as::<_, TaskRow>(&sql)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(executor)
            .await?
            .map(Task::try_from)
            .transpose()
    }

    /// All of a profile's tasks, newest first
    pub async fn list_for_owner<'e, E>(executor: E, owner_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        Self::list(executor, owner_id, &TaskFilter::default(), TaskSort::default()).await
    }

    pub async fn list<'e, E>(
        executor: E,
        owner_id: Uuid,
        filter: &TaskFilter,
        sort: TaskSort,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut query = QueryBuilder::<Sqlite>::new(TASK_SELECT);
        query.push(" WHERE owner_id = ").push_bind(owner_id.to_string());

        if let Some(completed) = filter.completion.as_flag() {
            query.push(" AND completed = ").push_bind(completed);
        }
        if let Some(priority) = filter.priority {
            query.push(" AND priority = ").push_bind(priority.as_str());
        }
        if let Some(project_id) = filter.project_id {
            query.push(" AND project_id = ").push_bind(project_id.to_string());
        }
        query.push(" ORDER BY ").push(sort.order_by());

        let rows = query.build_query_as::<TaskRow>().fetch_all(executor).await?;
        let tasks = into_tasks(rows)?;
        Ok(match SearchTerm::parse(filter.search.as_deref()) {
            Some(term) => tasks
                .into_iter()
                .filter(|t| term.matches(&t.title, t.description.as_deref()))
                .collect(),
            None => tasks,
        })
    }

    /// Most recently created tasks with the given completion state
    pub async fn recent_by_completion<'e, E>(
        executor: E,
        owner_id: Uuid,
        completed: bool,
        limit: i64,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "{TASK_SELECT} WHERE owner_id = ? AND completed = ? ORDER BY created_at DESC, rowid DESC LIMIT ?"
        );
        let rows = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(owner_id.to_string())
            .bind(completed)
            .bind(limit)
            .fetch_all(executor)
            .await?;
        into_tasks(rows)
    }

    /// Tasks of every owner attached to a project, newest first
    pub async fn list_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
        completion: CompletionFilter,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut query = QueryBuilder::<Sqlite>::new(TASK_SELECT);
        query.push(" WHERE project_id = ").push_bind(project_id.to_string());
        if let Some(completed) = completion.as_flag() {
            query.push(" AND completed = ").push_bind(completed);
        }
        query.push(" ORDER BY created_at DESC, rowid DESC");

        let rows = query.build_query_as::<TaskRow>().fetch_all(executor).await?;
        into_tasks(rows)
    }

    /// Returns false when no task with this id is owned by `task.owner_id`
    pub async fn update<'e, E>(executor: E, task: &Task) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE tf_tasks
            SET project_id = ?, title = ?, description = ?, completed = ?, completed_at = ?,
                priority = ?, due_date = ?, updated_at = ?
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(task.project_id.map(|id| id.to_string()))
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(task.completed_at.map(|t| t.timestamp()))
        .bind(task.priority.as_str())
        .bind(decode::format_date(task.due_date))
        .bind(task.updated_at.timestamp())
        .bind(task.id.to_string())
        .bind(task.owner_id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid, owner_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tf_tasks WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Clear the project reference on every task of a project, returning how many were detached
    pub async fn detach_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE tf_tasks SET project_id = NULL WHERE project_id = ?")
            .bind(project_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
