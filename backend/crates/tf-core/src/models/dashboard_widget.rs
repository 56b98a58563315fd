use crate::WidgetType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-profile visibility and position of one dashboard widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardWidget {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub widget_type: WidgetType,
    pub position: i64,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
}

impl DashboardWidget {
    pub fn new(profile_id: Uuid, widget_type: WidgetType, position: i64, is_visible: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile_id,
            widget_type,
            position,
            is_visible,
            created_at: Utc::now(),
        }
    }

    /// Layout used when a profile has stored nothing: every widget visible, in declaration order
    pub fn default_layout(profile_id: Uuid) -> Vec<Self> {
        WidgetType::ALL
            .into_iter()
            .zip(0..)
            .map(|(widget_type, position)| Self::new(profile_id, widget_type, position, true))
            .collect()
    }

    /// Stored rows ordered by position, or the default layout when none exist
    pub fn effective_layout(profile_id: Uuid, mut stored: Vec<Self>) -> Vec<Self> {
        if stored.is_empty() {
            return Self::default_layout(profile_id);
        }
        stored.sort_by_key(|widget| widget.position);
        stored
    }
}
