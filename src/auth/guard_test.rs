use super::*;

fn state(role: Option<Role>, loading: bool) -> SessionState {
    SessionState { role, loading, pending: false }
}

// =============================================================
// Hydration window
// =============================================================

#[test]
fn loading_never_redirects() {
    for role in [None, Some(Role::Worker), Some(Role::Doctor), Some(Role::Admin)] {
        for required in [None, Some(Role::Worker), Some(Role::Doctor)] {
            assert_eq!(decide(&state(role, true), required), GuardDecision::Pending);
        }
    }
}

// =============================================================
// Access table
// =============================================================

#[test]
fn no_role_redirects_to_entry() {
    for required in [None, Some(Role::Worker), Some(Role::Doctor), Some(Role::Admin)] {
        assert_eq!(decide(&state(None, false), required), GuardDecision::Redirect("/"));
    }
}

#[test]
fn mismatched_role_redirects() {
    assert_eq!(
        decide(&state(Some(Role::Doctor), false), Some(Role::Worker)),
        GuardDecision::Redirect(ENTRY_ROUTE)
    );
}

#[test]
fn admin_has_no_access_to_other_dashboards() {
    assert_eq!(
        decide(&state(Some(Role::Admin), false), Some(Role::Doctor)),
        GuardDecision::Redirect(ENTRY_ROUTE)
    );
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(decide(&state(Some(Role::Doctor), false), Some(Role::Doctor)), GuardDecision::Allow);
}

#[test]
fn any_role_is_allowed_when_none_required() {
    assert_eq!(decide(&state(Some(Role::Worker), false), None), GuardDecision::Allow);
}

#[test]
fn pending_request_does_not_affect_access() {
    let s = SessionState { role: Some(Role::Worker), loading: false, pending: true };
    assert_eq!(decide(&s, Some(Role::Worker)), GuardDecision::Allow);
}
