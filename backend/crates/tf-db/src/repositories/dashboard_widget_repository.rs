use crate::{Result as DbErrorResult, decode};

use tf_core::DashboardWidget;

use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct DashboardWidgetRow {
    id: String,
    profile_id: String,
    widget_type: String,
    position: i64,
    is_visible: bool,
    created_at: i64,
}

impl TryFrom<DashboardWidgetRow> for DashboardWidget {
    type Error = crate::DbError;

    fn try_from(r: DashboardWidgetRow) -> DbErrorResult<Self> {
        Ok(DashboardWidget {
            id: decode::uuid(&r.id, "dashboard_widget.id")?,
            profile_id: decode::uuid(&r.profile_id, "dashboard_widget.profile_id")?,
            widget_type: decode::parsed(&r.widget_type, "dashboard_widget.widget_type")?,
            position: r.position,
            is_visible: r.is_visible,
            created_at: decode::timestamp(r.created_at, "dashboard_widget.created_at")?,
        })
    }
}

pub struct DashboardWidgetRepository {
    pool: SqlitePool,
}

impl DashboardWidgetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Stored configuration ordered by position; empty when nothing was saved
    pub async fn list_for_profile(&self, profile_id: Uuid) -> DbErrorResult<Vec<DashboardWidget>> {
        let rows = sqlx::query_as::<_, DashboardWidgetRow>(
            r#"
            SELECT id, profile_id, widget_type, position, is_visible, created_at
            FROM tf_dashboard_widgets
            WHERE profile_id = ?
            ORDER BY position ASC, rowid ASC
            "#,
        )
        .bind(profile_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DashboardWidget::try_from).collect()
    }

    /// Insert, or overwrite position and visibility of the existing
    /// (profile, widget type) row. Returns the stored row.
    pub async fn upsert(&self, widget: &DashboardWidget) -> DbErrorResult<DashboardWidget> {
        let row = sqlx::query_as::<_, DashboardWidgetRow>(
            r#"
            INSERT INTO tf_dashboard_widgets (id, profile_id, widget_type, position, is_visible, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (profile_id, widget_type) DO UPDATE SET
                position = excluded.position,
                is_visible = excluded.is_visible
            RETURNING id, profile_id, widget_type, position, is_visible, created_at
            "#,
        )
        .bind(widget.id.to_string())
        .bind(widget.profile_id.to_string())
        .bind(widget.widget_type.as_str())
        .bind(widget.position)
        .bind(widget.is_visible)
        .bind(widget.created_at.timestamp())
        .fetch_one(&self.pool)
        .await?;

        DashboardWidget::try_from(row)
    }
}
