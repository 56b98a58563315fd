use crate::{Result as DbErrorResult, decode};

use tf_core::Identity;

use chrono::{DateTime, Utc};
use uuid::Uuid;

const IDENTITY_COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, \
    is_active, token_version, created_at, last_login";

#[derive(sqlx::FromRow)]
struct IdentityRow {
    id: String,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    is_active: bool,
    token_version: i64,
    created_at: i64,
    last_login: Option<i64>,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = crate::DbError;

    fn try_from(r: IdentityRow) -> DbErrorResult<Self> {
        Ok(Identity {
            id: decode::uuid(&r.id, "identity.id")?,
            username: r.username,
            email: r.email,
            first_name: r.first_name,
            last_name: r.last_name,
            password_hash: r.password_hash,
            is_active: r.is_active,
            token_version: r.token_version,
            created_at: decode::timestamp(r.created_at, "identity.created_at")?,
            last_login: decode::optional_timestamp(r.last_login, "identity.last_login")?,
        })
    }
}

pub struct IdentityRepository;

impl IdentityRepository {
    /// Duplicate username or email surfaces as `DbError::Conflict`
    pub async fn create<'e, E>(executor: E, identity: &Identity) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO tf_identities (
                id, username, email, first_name, last_name, password_hash,
                is_active, token_version, created_at, last_login
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.password_hash)
        .bind(identity.is_active)
        .bind(identity.token_version)
        .bind(identity.created_at.timestamp())
        .bind(identity.last_login.map(|t| t.timestamp()))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Identity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {IDENTITY_COLUMNS} FROM tf_identities WHERE id = ?");
        sqlx::query_as::<_, IdentityRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?
            .map(Identity::try_from)
            .transpose()
    }

    pub async fn find_by_username<'e, E>(executor: E, username: &str) -> DbErrorResult<Option<Identity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {IDENTITY_COLUMNS} FROM tf_identities WHERE username = ?");
        sqlx::query_as::<_, IdentityRow>(&sql)
            .bind(username)
            .fetch_optional(executor)
            .await?
            .map(Identity::try_from)
            .transpose()
    }

    pub async fn username_exists<'e, E>(executor: E, username: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tf_identities WHERE username = ?)")
                .bind(username)
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }

    /// Whether another identity already uses `email`
    pub async fn email_taken<'e, E>(executor: E, email: &str, excluding: Option<Uuid>) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM tf_identities WHERE email = ? AND id IS NOT ?)",
        )
        .bind(email)
        .bind(excluding.map(|id| id.to_string()))
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    /// Names and email; the username is immutable
    pub async fn update_details<'e, E>(executor: E, identity: &Identity) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            "UPDATE tf_identities SET first_name = ?, last_name = ?, email = ? WHERE id = ?",
        )
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.email)
        .bind(identity.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Store a new hash and bump the token version, returning the new version
    pub async fn update_password<'e, E>(executor: E, id: Uuid, password_hash: &str) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let version: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE tf_identities
            SET password_hash = ?, token_version = token_version + 1
            WHERE id = ?
            RETURNING token_version
            "#,
        )
        .bind(password_hash)
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        Ok(version)
    }

    pub async fn record_login<'e, E>(executor: E, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE tf_identities SET last_login = ? WHERE id = ?")
            .bind(at.timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}
