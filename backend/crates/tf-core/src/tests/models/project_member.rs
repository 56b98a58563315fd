use crate::{Permission, Project, ProjectRole};

use uuid::Uuid;

#[test]
fn test_owner_has_every_permission() {
    for permission in [
        Permission::View,
        Permission::ToggleCompletion,
        Permission::Edit,
        Permission::ManageMembers,
    ] {
        assert!(ProjectRole::Owner.has_permission(permission));
    }
}

#[test]
fn test_member_can_read_and_toggle_only() {
    assert!(ProjectRole::Member.has_permission(Permission::View));
    assert!(ProjectRole::Member.has_permission(Permission::ToggleCompletion));
    assert!(!ProjectRole::Member.has_permission(Permission::Edit));
    assert!(!ProjectRole::Member.has_permission(Permission::ManageMembers));
}

#[test]
fn test_resolve_role() {
    let owner = Uuid::new_v4();
    let project = Project::new(owner, "Launch".to_string());

    assert_eq!(ProjectRole::resolve(&project, owner, false), Some(ProjectRole::Owner));
    assert_eq!(
        ProjectRole::resolve(&project, Uuid::new_v4(), true),
        Some(ProjectRole::Member)
    );
    assert_eq!(ProjectRole::resolve(&project, Uuid::new_v4(), false), None);
}
