// tests/permission_tests.rs

use survey_client::{Action, PermissionChecker, Role};

#[test]
fn survey_moderation_scenarios() {
    assert!(PermissionChecker::can_perform(
        Role::Admin,
        Action::ApproveSurvey,
        None
    ));
    assert!(!PermissionChecker::can_perform(
        Role::Creator,
        Action::ApproveSurvey,
        None
    ));
}

#[test]
fn admin_management_scenarios() {
    assert!(!PermissionChecker::can_perform(
        Role::Admin,
        Action::CreateAdmin,
        None
    ));
    assert!(PermissionChecker::can_perform(
        Role::SuperAdmin,
        Action::CreateAdmin,
        None
    ));
}

#[test]
fn admin_cannot_moderate_super_admin() {
    for action in [Action::ApproveUser, Action::RejectUser, Action::SuspendUser] {
        assert!(!PermissionChecker::can_perform(
            Role::Admin,
            action,
            Some(Role::SuperAdmin)
        ));
        assert!(PermissionChecker::can_perform(
            Role::SuperAdmin,
            action,
            Some(Role::Admin)
        ));
    }
}

#[test]
fn unknown_inputs_deny_by_default() {
    assert!(!PermissionChecker::can_perform_str(
        "super_admin",
        "nonexistent_action",
        None
    ));
    assert!(!PermissionChecker::can_perform_str(
        "support_agent",
        "approve_survey",
        None
    ));
}

#[test]
fn permissions_are_monotone_in_actor_rank() {
    for action in Action::ALL {
        for target in [None, Some(Role::Filler), Some(Role::Admin)] {
            let mut previously_allowed = false;
            // Roles iterated in ascending rank order
            for actor in Role::ALL {
                let allowed = PermissionChecker::can_perform(actor, action, target);
                if previously_allowed {
                    assert!(allowed, "{} lost {} at higher rank", actor, action);
                }
                previously_allowed = allowed;
            }
        }
    }
}
