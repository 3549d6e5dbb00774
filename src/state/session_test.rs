use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_no_role() {
    let state = SessionState::default();
    assert!(state.role.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_default_is_loading() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.pending);
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_round_trips_as_str() {
    for role in [Role::Worker, Role::Doctor, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_parse_rejects_unknown_and_mixed_case() {
    assert_eq!(Role::parse("nurse"), None);
    assert_eq!(Role::parse("Doctor"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_home_routes() {
    assert_eq!(Role::Worker.home_route(), "/worker");
    assert_eq!(Role::Doctor.home_route(), "/doctor");
    assert_eq!(Role::Admin.home_route(), "/admin");
}

#[test]
fn signup_roles_exclude_admin() {
    assert!(!SIGNUP_ROLES.contains(&Role::Admin));
}
