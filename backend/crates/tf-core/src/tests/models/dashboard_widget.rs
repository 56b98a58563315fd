use crate::{DashboardWidget, WidgetType};

use uuid::Uuid;

#[test]
fn test_default_layout_shows_every_widget_in_order() {
    let profile_id = Uuid::new_v4();

    let layout = DashboardWidget::default_layout(profile_id);

    let types: Vec<WidgetType> = layout.iter().map(|widget| widget.widget_type).collect();
    assert_eq!(types, WidgetType::ALL.to_vec());
    assert!(layout.iter().all(|widget| widget.is_visible));
    assert_eq!(layout[4].position, 4);
}

#[test]
fn given_stored_widgets_when_resolving_layout_then_sorted_by_position() {
    // Given
    let profile_id = Uuid::new_v4();
    let stored = vec![
        DashboardWidget::new(profile_id, WidgetType::CompletionStats, 2, true),
        DashboardWidget::new(profile_id, WidgetType::RecentTasks, 0, false),
    ];

    // When
    let layout = DashboardWidget::effective_layout(profile_id, stored);

    // Then
    assert_eq!(layout.len(), 2);
    assert_eq!(layout[0].widget_type, WidgetType::RecentTasks);
    assert!(!layout[0].is_visible);
}
