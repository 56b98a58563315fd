use crate::{Result as DbErrorResult, decode};

use tf_core::Profile;

use uuid::Uuid;

const PROFILE_COLUMNS: &str = "p.id, p.identity_id, p.bio, p.phone, p.location, p.avatar, \
    p.theme, p.email_notifications, p.created_at, p.updated_at";

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: String,
    identity_id: String,
    bio: String,
    phone: String,
    location: String,
    avatar: Option<String>,
    theme: String,
    email_notifications: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = crate::DbError;

    fn try_from(r: ProfileRow) -> DbErrorResult<Self> {
        Ok(Profile {
            id: decode::uuid(&r.id, "profile.id")?,
            identity_id: decode::uuid(&r.identity_id, "profile.identity_id")?,
            bio: r.bio,
            phone: r.phone,
            location: r.location,
            avatar: r.avatar,
            theme: decode::parsed(&r.theme, "profile.theme")?,
            email_notifications: r.email_notifications,
            created_at: decode::timestamp(r.created_at, "profile.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "profile.updated_at")?,
        })
    }
}

pub struct ProfileRepository;

impl ProfileRepository {
    /// A second profile for the same identity surfaces as `DbError::Conflict`
    pub async fn create<'e, E>(executor: E, profile: &Profile) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO tf_profiles (
                id, identity_id, bio, phone, location, avatar,
                theme, email_notifications, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(profile.id.to_string())
        .bind(profile.identity_id.to_string())
        .bind(&profile.bio)
        .bind(&profile.phone)
        .bind(&profile.location)
        .bind(&profile.avatar)
        .bind(profile.theme.as_str())
        .bind(profile.email_notifications)
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_identity<'e, E>(executor: E, identity_id: Uuid) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM tf_profiles p WHERE p.identity_id = ?");
        sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(identity_id.to_string())
            .fetch_optional(executor)
            .await?
            .map(Profile::try_from)
            .transpose()
    }

    /// Profile whose identity has exactly this email
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM tf_profiles p \
             JOIN tf_identities i ON i.id = p.identity_id \
             WHERE i.email = ?"
        );
        sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(email)
            .fetch_optional(executor)
            .await?
            .map(Profile::try_from)
            .transpose()
    }

    pub async fn update<'e, E>(executor: E, profile: &Profile) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE tf_profiles
            SET bio = ?, phone = ?, location = ?, avatar = ?,
                theme = ?, email_notifications = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&profile.bio)
        .bind(&profile.phone)
        .bind(&profile.location)
        .bind(&profile.avatar)
        .bind(profile.theme.as_str())
        .bind(profile.email_notifications)
        .bind(profile.updated_at.timestamp())
        .bind(profile.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
