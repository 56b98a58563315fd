use crate::repositories::project_filter::{ProjectFilter, ProjectStatusFilter};
use crate::repositories::task_filter::SearchTerm;
use crate::{Result as DbErrorResult, TaskRepository, decode};

use tf_core::{Project, ProjectRole};

use log::debug;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const PROJECT_COLUMNS: &str = "p.id, p.owner_id, p.title, p.description, p.color, p.completed, \
    p.created_at, p.updated_at";

/// Owner, or holder of a membership row
const ACCESSIBLE_BY: &str = "(p.owner_id = ? OR EXISTS (\
    SELECT 1 FROM tf_project_members m WHERE m.project_id = p.id AND m.profile_id = ?))";

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    owner_id: String,
    title: String,
    description: Option<String>,
    color: String,
    completed: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = crate::DbError;

    fn try_from(r: ProjectRow) -> DbErrorResult<Self> {
        Ok(Project {
            id: decode::uuid(&r.id, "project.id")?,
            owner_id: decode::uuid(&r.owner_id, "project.owner_id")?,
            title: r.title,
            description: r.description,
            color: decode::parsed(&r.color, "project.color")?,
            completed: r.completed,
            created_at: decode::timestamp(r.created_at, "project.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "project.updated_at")?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AccessibleProjectRow {
    #[sqlx(flatten)]
    project: ProjectRow,
    is_member: bool,
}

#[derive(sqlx::FromRow)]
struct ProjectSummaryRow {
    #[sqlx(flatten)]
    project: ProjectRow,
    task_count: i64,
    completed_task_count: i64,
}

/// A project as listed, with counts over its tasks of every owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub project: Project,
    pub task_count: i64,
    pub completed_task_count: i64,
}

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO tf_projects (
                id, owner_id, title, description, color, completed, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(project.owner_id.to_string())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.color.as_str())
        .bind(project.completed)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Only when `owner_id` owns the project
    pub async fn find_owned<'e, E>(executor: E, id: Uuid, owner_id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM tf_projects p WHERE p.id = ? AND p.owner_id = ?");
        sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(executor)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    /// The project and the caller's role, when the caller owns it or is a member
    pub async fn find_accessible<'e, E>(
        executor: E,
        id: Uuid,
        profile_id: Uuid,
    ) -> DbErrorResult<Option<(Project, ProjectRole)>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {PROJECT_COLUMNS}, EXISTS (\
                SELECT 1 FROM tf_project_members m WHERE m.project_id = p.id AND m.profile_id = ?\
             ) AS is_member \
             FROM tf_projects p WHERE p.id = ? AND {ACCESSIBLE_BY}"
        );
        let profile = profile_id.to_string();
        let row = sqlx::query_as::<_, AccessibleProjectRow>(&sql)
            .bind(&profile)
            .bind(id.to_string())
            .bind(&profile)
            .bind(&profile)
            .fetch_optional(executor)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let is_member = row.is_member;
        let project = Project::try_from(row.project)?;
        Ok(ProjectRole::resolve(&project, profile_id, is_member).map(|role| (project, role)))
    }

    /// Projects the profile owns or is a member of, newest first
    pub async fn list_accessible<'e, E>(
        executor: E,
        profile_id: Uuid,
        filter: &ProjectFilter,
    ) -> DbErrorResult<Vec<ProjectSummary>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {PROJECT_COLUMNS}, \
             (SELECT COUNT(*) FROM tf_tasks t WHERE t.project_id = p.id) AS task_count, \
             (SELECT COUNT(*) FROM tf_tasks t WHERE t.project_id = p.id AND t.completed = 1) \
                AS completed_task_count \
             FROM tf_projects p WHERE (p.owner_id = "
        ));
        query
            .push_bind(profile_id.to_string())
            .push(
                " OR EXISTS (SELECT 1 FROM tf_project_members m \
                 WHERE m.project_id = p.id AND m.profile_id = ",
            )
            .push_bind(profile_id.to_string())
            .push("))");

        match filter.status {
            ProjectStatusFilter::Any => {}
            ProjectStatusFilter::Completed => {
                query.push(" AND p.completed = 1");
            }
            ProjectStatusFilter::Active => {
                query.push(" AND p.completed = 0");
            }
        }
        query.push(" ORDER BY p.created_at DESC, p.rowid DESC");

        let rows = query.build_query_as::<ProjectSummaryRow>().fetch_all(executor).await?;
        let term = SearchTerm::parse(filter.search.as_deref());
        let mut summaries = Vec::with_capacity(rows.len());
        for row in rows {
            let project = Project::try_from(row.project)?;
            if term
                .as_ref()
                .is_some_and(|t| !t.matches(&project.title, project.description.as_deref()))
            {
                continue;
            }
            summaries.push(ProjectSummary {
                project,
                task_count: row.task_count,
                completed_task_count: row.completed_task_count,
            });
        }
        Ok(summaries)
    }

    /// Owner-scoped; false when the caller does not own the project
    pub async fn update<'e, E>(executor: E, project: &Project) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE tf_projects
            SET title = ?, description = ?, color = ?, completed = ?, updated_at = ?
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.color.as_str())
        .bind(project.completed)
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .bind(project.owner_id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Completion flag only; access is checked by the caller
    pub async fn set_completed<'e, E>(executor: E, project: &Project) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE tf_projects SET completed = ?, updated_at = ? WHERE id = ?")
            .bind(project.completed)
            .bind(project.updated_at.timestamp())
            .bind(project.id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Detach the project's tasks, then delete it with its memberships, in one transaction.
    /// Returns false (and changes nothing) when `owner_id` does not own the project.
    pub async fn delete(pool: &SqlitePool, id: Uuid, owner_id: Uuid) -> DbErrorResult<bool> {
        let mut tx = pool.begin().await?;

        if Self::find_owned(&mut *tx, id, owner_id).await?.is_none() {
            return Ok(false);
        }

        let detached = TaskRepository::detach_project(&mut *tx, id).await?;

        sqlx::query("DELETE FROM tf_project_members WHERE project_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM tf_projects WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!("Deleted project {} ({} tasks detached)", id, detached);
        Ok(true)
    }
}
