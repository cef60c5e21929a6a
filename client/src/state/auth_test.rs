use super::*;
use crate::net::types::UserRole;

fn user(role: UserRole) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// Mutators
// =============================================================

#[test]
fn login_sets_user_and_finishes_loading() {
    let mut state = AuthState::default();
    state.login(user(UserRole::Customer));
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
}

#[test]
fn logout_clears_user() {
    let mut state = AuthState::default();
    state.login(user(UserRole::Customer));
    state.logout();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn resolve_with_none_marks_anonymous() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn is_staff_requires_staff_user() {
    let mut state = AuthState::default();
    assert!(!state.is_staff());
    state.login(user(UserRole::Customer));
    assert!(!state.is_staff());
    state.login(user(UserRole::Staff));
    assert!(state.is_staff());
}
