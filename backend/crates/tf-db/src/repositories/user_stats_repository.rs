use crate::{Result as DbErrorResult, decode};

use tf_core::UserStats;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserStatsRow {
    profile_id: String,
    total_tasks: i64,
    completed_tasks: i64,
    total_projects: i64,
    completed_projects: i64,
    last_updated: i64,
}

impl TryFrom<UserStatsRow> for UserStats {
    type Error = crate::DbError;

    fn try_from(r: UserStatsRow) -> DbErrorResult<Self> {
        Ok(UserStats {
            profile_id: decode::uuid(&r.profile_id, "user_stats.profile_id")?,
            total_tasks: r.total_tasks,
            completed_tasks: r.completed_tasks,
            total_projects: r.total_projects,
            completed_projects: r.completed_projects,
            last_updated: decode::timestamp(r.last_updated, "user_stats.last_updated")?,
        })
    }
}

/// Cache of per-profile counters. Task counts cover owned tasks,
/// project counts cover owned projects.
pub struct UserStatsRepository {
    pool: SqlitePool,
}

impl UserStatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Recompute the counters from the live tables and store them
    pub async fn refresh(&self, profile_id: Uuid, now: DateTime<Utc>) -> DbErrorResult<UserStats> {
        let profile = profile_id.to_string();
        let row = sqlx::query_as::<_, UserStatsRow>(
            r#"
            INSERT INTO tf_user_stats (
                profile_id, total_tasks, completed_tasks, total_projects, completed_projects, last_updated
            )
            SELECT
                ?1,
                (SELECT COUNT(*) FROM tf_tasks WHERE owner_id = ?1),
                (SELECT COUNT(*) FROM tf_tasks WHERE owner_id = ?1 AND completed = 1),
                (SELECT COUNT(*) FROM tf_projects WHERE owner_id = ?1),
                (SELECT COUNT(*) FROM tf_projects WHERE owner_id = ?1 AND completed = 1),
                ?2
            WHERE true
            ON CONFLICT (profile_id) DO UPDATE SET
                total_tasks = excluded.total_tasks,
                completed_tasks = excluded.completed_tasks,
                total_projects = excluded.total_projects,
                completed_projects = excluded.completed_projects,
                last_updated = excluded.last_updated
            RETURNING profile_id, total_tasks, completed_tasks, total_projects, completed_projects, last_updated
            "#,
        )
        .bind(&profile)
        .bind(now.timestamp())
        .fetch_one(&self.pool)
        .await?;

        UserStats::try_from(row)
    }

    pub async fn find(&self, profile_id: Uuid) -> DbErrorResult<Option<UserStats>> {
        sqlx::query_as::<_, UserStatsRow>(
            r#"
            SELECT profile_id, total_tasks, completed_tasks, total_projects, completed_projects, last_updated
            FROM tf_user_stats
            WHERE profile_id = ?
            "#,
        )
        .bind(profile_id.to_string())
        .fetch_optional(&self.pool)
        .await?
        .map(UserStats::try_from)
        .transpose()
    }
}
