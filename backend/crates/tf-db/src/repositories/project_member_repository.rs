use crate::{Result as DbErrorResult, decode};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A member profile with the identity fields needed to display it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub profile_id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct MemberProfileRow {
    profile_id: String,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    joined_at: i64,
}

impl TryFrom<MemberProfileRow> for MemberProfile {
    type Error = crate::DbError;

    fn try_from(r: MemberProfileRow) -> DbErrorResult<Self> {
        Ok(MemberProfile {
            profile_id: decode::uuid(&r.profile_id, "project_member.profile_id")?,
            username: r.username,
            email: r.email,
            first_name: r.first_name,
            last_name: r.last_name,
            joined_at: decode::timestamp(r.joined_at, "project_member.created_at")?,
        })
    }
}

pub struct ProjectMemberRepository {
    pool: SqlitePool,
}

impl ProjectMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Idempotent; returns true only when a new membership row was written
    pub async fn add(&self, project_id: Uuid, profile_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO tf_project_members (project_id, profile_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(project_id.to_string())
        .bind(profile_id.to_string())
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Idempotent; returns true only when a membership row was removed
    pub async fn remove(&self, project_id: Uuid, profile_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM tf_project_members WHERE project_id = ? AND profile_id = ?")
            .bind(project_id.to_string())
            .bind(profile_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Members in the order they joined
    pub async fn list_members(&self, project_id: Uuid) -> DbErrorResult<Vec<MemberProfile>> {
        let rows = sqlx::query_as::<_, MemberProfileRow>(
            r#"
            SELECT m.profile_id, i.username, i.email, i.first_name, i.last_name,
                   m.created_at AS joined_at
            FROM tf_project_members m
            JOIN tf_profiles p ON p.id = m.profile_id
            JOIN tf_identities i ON i.id = p.identity_id
            WHERE m.project_id = ?
            ORDER BY m.created_at ASC, m.rowid ASC
            "#,
        )
        .bind(project_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MemberProfile::try_from).collect()
    }
}
